#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
pub mod trace_ctx;

// Re-exports for public API
pub use config::{Config, StoreConfig};
pub use domain::{Problem, ProblemId};
pub use error::AppError;
pub use errors::{ErrorCode, StoreError};
pub use middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
pub use state::{build_state, AppState};
pub use store::{check_connectivity, ProblemFilter, ProblemStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
