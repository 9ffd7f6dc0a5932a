//! Log output for test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Checked in order; the first one set wins.
const FILTER_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];
const QUIET: &str = "warn";

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(QUIET))
}

/// Install a plain-text subscriber routed through the libtest writer, so
/// output is captured per test and only shown for failures.
///
/// Unit tests and integration binaries both call this from a `ctor`; the
/// first call wins and later ones return immediately. A subscriber installed
/// by someone else is left in place.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
