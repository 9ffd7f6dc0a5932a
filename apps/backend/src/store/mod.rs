//! Data store client: typed reads of problem records from the configured
//! backend.

pub mod connectivity;
pub mod memory;
pub mod postgres;
pub mod supabase;

use std::fs;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::domain::Problem;
use crate::errors::StoreError;

pub use connectivity::check_connectivity;
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use supabase::SupabaseStore;

/// Exact-match filter applied to the problems collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemFilter {
    All,
    Id(String),
    Category(String),
}

/// Read access to the problems collection.
///
/// Implementations hold no per-request state; one instance is shared by all
/// workers behind an `Arc`.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Return every record matching `filter`, in store default order.
    async fn fetch(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError>;

    /// Minimal read used to confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Build the store selected by `config`.
///
/// Network backends connect lazily, so an unreachable store does not fail
/// here; that is reported by [`check_connectivity`] and per request.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn ProblemStore>, StoreError> {
    match config {
        StoreConfig::Supabase(cfg) => Ok(Arc::new(SupabaseStore::new(cfg)?)),
        StoreConfig::Postgres(cfg) => Ok(Arc::new(PostgresStore::connect(cfg).await?)),
        StoreConfig::Memory { fixture: None } => Ok(Arc::new(InMemoryStore::default())),
        StoreConfig::Memory {
            fixture: Some(path),
        } => {
            let raw = fs::read_to_string(path).map_err(|e| {
                StoreError::unavailable(format!(
                    "fixture '{}' could not be read: {e}",
                    path.display()
                ))
            })?;
            Ok(Arc::new(InMemoryStore::from_json(&raw)?))
        }
    }
}
