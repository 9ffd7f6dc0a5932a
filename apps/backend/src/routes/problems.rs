//! Problem read endpoints mounted under `/api/problems`.

use actix_web::{web, Result};
use tracing::debug;

use crate::domain::Problem;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::store::ProblemFilter;

/// GET /api/problems
///
/// Every problem in store order; an empty store yields `[]`.
async fn list_problems(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<Problem>>, AppError> {
    let problems = app_state.store().fetch(&ProblemFilter::All).await?;
    debug!(count = problems.len(), "listed problems");
    Ok(web::Json(problems))
}

/// GET /api/problems/{id}
async fn get_problem(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Problem>, AppError> {
    let id = path.into_inner();

    let problem = app_state
        .store()
        .fetch(&ProblemFilter::Id(id.clone()))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ProblemNotFound,
                format!("Problem with ID '{id}' not found"),
            )
        })?;

    Ok(web::Json(problem))
}

/// GET /api/problems/category/{category}
///
/// Exact match on the category label. An unknown category is not an error.
async fn list_problems_by_category(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<Problem>>, AppError> {
    let category = path.into_inner();
    let problems = app_state
        .store()
        .fetch(&ProblemFilter::Category(category.clone()))
        .await?;
    debug!(%category, count = problems.len(), "listed problems by category");
    Ok(web::Json(problems))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // `/category/{category}` must be registered before `/{id}`.
    cfg.route("", web::get().to(list_problems))
        .route("/", web::get().to(list_problems))
        .route(
            "/category/{category}",
            web::get().to(list_problems_by_category),
        )
        .route("/{id}", web::get().to(get_problem));
}
