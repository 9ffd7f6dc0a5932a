use actix_cors::Cors;
use actix_web::http::header;

/// Unrestricted CORS: any origin, method and header is accepted.
///
/// The API is read-only and unauthenticated, so no origin list is kept.
/// `x-request-id` and `x-trace-id` are exposed so browser clients can quote
/// them in bug reports.
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-trace-id"),
        ])
        .max_age(3600)
}
