use std::sync::Arc;

use crate::domain::Problem;
use crate::store::{InMemoryStore, ProblemStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProblemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProblemStore>) -> Self {
        Self { store }
    }

    /// State backed by an in-memory store holding `problems`
    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self::new(Arc::new(InMemoryStore::new(problems)))
    }

    pub fn store(&self) -> &dyn ProblemStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend())
            .finish()
    }
}
