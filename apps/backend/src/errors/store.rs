//! Store-level error type shared by every `ProblemStore` backend.
//!
//! This error is HTTP-agnostic. Handlers return `AppError` and convert via
//! the `From<StoreError> for AppError` implementation in `crate::error`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (connect failure, timeout, pool exhausted).
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store answered but the query failed.
    #[error("query failed: {0}")]
    Query(String),
    /// A returned row could not be mapped to a `Problem`.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl StoreError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable(detail.into())
    }

    pub fn query(detail: impl Into<String>) -> Self {
        Self::Query(detail.into())
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRecord(detail.into())
    }
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::DbErr;

        match &e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::unavailable(e.to_string()),
            _ => Self::query(e.to_string()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::unavailable(e.to_string())
        } else if e.is_decode() {
            Self::malformed(e.to_string())
        } else {
            Self::query(e.to_string())
        }
    }
}
