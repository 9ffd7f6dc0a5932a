//! Application assembly shared by `main` and the test app builder.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::routes;

/// JSON body parsing with a payload limit; parse failures become problem
/// details instead of actix's plain-text error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            AppError::bad_request(ErrorCode::InvalidJson, err.to_string()).into()
        })
}

async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::RouteNotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

/// Body parsing, routes and the fallback for unmatched paths.
pub fn configure(cfg: &mut web::ServiceConfig, max_json_payload_size: usize) {
    cfg.app_data(json_config(max_json_payload_size))
        .configure(routes::configure)
        .default_service(web::to(route_not_found));
}
