use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{ErrorCode, StoreError};
use crate::trace_ctx;

/// RFC 7807 error body returned by every failing endpoint.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::NotFound { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Db { detail }
            | AppError::DbUnavailable { detail }
            | AppError::Internal { detail, .. }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Db { .. }
            | AppError::DbUnavailable { .. }
            | AppError::Internal { .. }
            | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::Internal,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Store failures never leak raw driver messages to clients; the full error
/// is logged where the conversion happens.
impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(detail) => {
                tracing::error!(error = %detail, "store unavailable");
                AppError::db_unavailable("The problem store is currently unreachable")
            }
            StoreError::Query(detail) => {
                tracing::error!(error = %detail, "store query failed");
                AppError::db("Failed to query the problem store")
            }
            StoreError::MalformedRecord(detail) => {
                tracing::error!(error = %detail, "store returned a malformed record");
                AppError::Internal {
                    code: ErrorCode::MalformedRecord,
                    detail: "The problem store returned a malformed record".to_string(),
                }
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://problems.api/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
