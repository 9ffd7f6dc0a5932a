use actix_web::{web, App, HttpServer};
use problems_backend::config::Config;
use problems_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use problems_backend::state::build_state;
use problems_backend::{app, check_connectivity};
use tracing::{error, info, warn};

mod telemetry;

fn fail(what: &str, e: impl std::fmt::Display) -> ! {
    error!(error = %e, "{what}");
    eprintln!("❌ {what}: {e}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd EnvironmentFile, or a sourced .env).
    let config = Config::from_env().unwrap_or_else(|e| fail("Invalid configuration", e));

    let app_state = build_state()
        .with_store_config(config.store.clone())
        .build()
        .await
        .unwrap_or_else(|e| fail("Failed to build application state", e));

    if check_connectivity(app_state.store()).await {
        info!(backend = config.store.backend_name(), "✅ Store connected");
    } else {
        warn!(
            backend = config.store.backend_name(),
            "Store not reachable yet; requests will fail until it is"
        );
    }

    let data = web::Data::new(app_state);
    let max_json_payload_size = config.max_json_payload_size;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| app::configure(cfg, max_json_payload_size))
    })
    .bind((config.host.as_str(), config.port))
    .unwrap_or_else(|e| fail("Failed to bind", e));

    info!(host = %config.host, port = config.port, "🚀 Listening");

    server.run().await
}
