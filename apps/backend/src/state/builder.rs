use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{connect_store, InMemoryStore, ProblemStore};

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    store_config: Option<StoreConfig>,
    store: Option<Arc<dyn ProblemStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect the store described by `config` at build time
    pub fn with_store_config(mut self, config: StoreConfig) -> Self {
        self.store_config = Some(config);
        self
    }

    /// Use an already constructed store; takes precedence over a config
    pub fn with_store(mut self, store: Arc<dyn ProblemStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(store) = self.store {
            return Ok(AppState::new(store));
        }

        match self.store_config {
            Some(config) => {
                let store = connect_store(&config).await.map_err(|e| {
                    AppError::config(format!(
                        "failed to initialise {} store: {e}",
                        config.backend_name()
                    ))
                })?;
                Ok(AppState::new(store))
            }
            None => Ok(AppState::new(Arc::new(InMemoryStore::default()))),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
