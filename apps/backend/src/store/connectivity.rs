//! Startup connectivity check.

use tracing::{info, warn};

use crate::store::ProblemStore;

/// Issue one minimal read against `store`.
///
/// Never fails: any error is logged as a warning and reported as `false`.
/// The caller only uses the result for logging; the server starts either way.
pub async fn check_connectivity(store: &dyn ProblemStore) -> bool {
    match store.ping().await {
        Ok(()) => {
            info!(backend = store.backend(), "store connection verified");
            true
        }
        Err(e) => {
            warn!(
                backend = store.backend(),
                error = %e,
                "store connection check failed; serving anyway"
            );
            false
        }
    }
}
