use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable. Store client crates stay at warn.
const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn,reqwest=warn,hyper=warn";

/// One JSON object per line on stdout. Events carry the enclosing `request`
/// span, so handler and store logs include the method, path and trace id.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_target(false)
                .with_ansi(false),
        )
        .init();
}
