//! Configuration loaded once from the environment at startup.

pub mod app;
pub mod store;

pub use app::Config;
pub use store::{PostgresConfig, StoreConfig, SupabaseConfig};

use std::env;

use crate::error::AppError;

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!("Required environment variable '{name}' is not set"))
        })
}

/// Parse an optional environment variable, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
