//! Store selection and credentials.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{must_var, parse_var};
use crate::error::AppError;

const DEFAULT_COLLECTION: &str = "problems";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which backend serves problem records, with its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    /// Supabase REST endpoint (`/rest/v1`)
    Supabase(SupabaseConfig),
    /// Direct Postgres connection
    Postgres(PostgresConfig),
    /// Records held in process, optionally seeded from a JSON array file
    Memory { fixture: Option<PathBuf> },
}

#[derive(Clone, PartialEq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://abc.supabase.co`
    pub url: String,
    pub key: String,
    pub collection: String,
    pub timeout: Duration,
}

// The access key must never reach logs.
impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("collection", &self.collection)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, PartialEq)]
pub struct PostgresConfig {
    pub database_url: String,
    pub collection: String,
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("database_url", &"<redacted>")
            .field("collection", &self.collection)
            .finish()
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "supabase".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "supabase" => Ok(StoreConfig::Supabase(SupabaseConfig {
                url: supabase_url()?,
                key: supabase_key()?,
                collection: collection()?,
                timeout: Duration::from_secs(parse_var(
                    "STORE_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )?),
            })),
            "postgres" => Ok(StoreConfig::Postgres(PostgresConfig {
                database_url: must_var("DATABASE_URL")?,
                collection: collection()?,
            })),
            "memory" => Ok(StoreConfig::Memory {
                fixture: env::var("PROBLEMS_FIXTURE").ok().map(PathBuf::from),
            }),
            other => Err(AppError::config(format!(
                "STORE_BACKEND must be one of 'supabase', 'postgres', 'memory', got '{other}'"
            ))),
        }
    }

    /// Short backend name for logs.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Supabase(_) => "supabase",
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Memory { .. } => "memory",
        }
    }
}

fn supabase_url() -> Result<String, AppError> {
    let url = must_var("SUPABASE_URL")?;
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(AppError::config(format!(
            "SUPABASE_URL must start with http:// or https://, got '{url}'"
        )));
    }
    Ok(url.to_string())
}

/// `SUPABASE_KEY` wins; otherwise the key is read from `SUPABASE_KEY_FILE`.
fn supabase_key() -> Result<String, AppError> {
    if let Ok(key) = must_var("SUPABASE_KEY") {
        return Ok(key.trim().to_string());
    }

    let path = env::var("SUPABASE_KEY_FILE").map_err(|_| {
        AppError::config(
            "Required environment variable 'SUPABASE_KEY' (or 'SUPABASE_KEY_FILE') is not set",
        )
    })?;

    let key = fs::read_to_string(&path).map_err(|e| {
        AppError::config(format!("Credential file '{path}' could not be read: {e}"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::config(format!("Credential file '{path}' is empty")));
    }
    Ok(key.to_string())
}

fn collection() -> Result<String, AppError> {
    let name =
        env::var("PROBLEMS_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());
    validate_collection(&name)?;
    Ok(name)
}

/// Collection names end up in URLs and SQL, so only plain identifiers pass.
pub fn validate_collection(name: &str) -> Result<(), AppError> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.len() <= 63;

    if valid {
        Ok(())
    } else {
        Err(AppError::config(format!(
            "PROBLEMS_COLLECTION must be a plain identifier, got '{name}'"
        )))
    }
}
