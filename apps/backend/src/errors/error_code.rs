//! Error codes for the problems API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body is not valid JSON or exceeds the payload limit
    InvalidJson,
    BadRequest,

    // Resource Not Found
    /// No problem with the requested identifier
    ProblemNotFound,
    /// No route matches the request path
    RouteNotFound,
    NotFound,

    // System Errors
    /// Store reachable but the query failed
    DbError,
    /// Store could not be reached
    DbUnavailable,
    /// Store returned a record that does not map to a problem
    MalformedRecord,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",

            Self::ProblemNotFound => "PROBLEM_NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::MalformedRecord => "MALFORMED_RECORD",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
