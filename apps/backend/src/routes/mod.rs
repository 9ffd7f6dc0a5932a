use actix_web::web;

pub mod health;
pub mod problems;

/// Register every application route.
///
/// Middleware (CORS, tracing, logging) is wrapped around the `App` by the
/// caller so tests can exercise the same routes with or without it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Problem routes: /api/problems/**
    cfg.service(web::scope("/api/problems").configure(problems::configure_routes));
}
