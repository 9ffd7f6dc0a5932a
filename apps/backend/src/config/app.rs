//! Process-wide configuration.
//!
//! Built once by `Config::from_env()` in `main` and passed by reference;
//! nothing else reads server settings from the environment.

use std::env;

use crate::config::parse_var;
use crate::config::store::StoreConfig;
use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // HTTP payload limits
    pub max_json_payload_size: usize,

    pub store: StoreConfig,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", DEFAULT_PORT)?;
        let max_json_payload_size = parse_var("MAX_JSON_PAYLOAD_SIZE", DEFAULT_MAX_PAYLOAD_SIZE)?;
        let store = StoreConfig::from_env()?;

        Ok(Config {
            host,
            port,
            max_json_payload_size,
            store,
        })
    }
}
