//! In-process store used by tests and local development.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::problem::{problems_from_rows, Problem};
use crate::errors::StoreError;
use crate::store::{ProblemFilter, ProblemStore};

/// Fixed set of problems, returned in insertion order. `unreachable()`
/// builds a store whose every call fails as if the network were down.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    problems: Vec<Problem>,
    reachable: bool,
}

impl InMemoryStore {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            problems: Vec::new(),
            reachable: false,
        }
    }

    /// Seed from a JSON array of records, as a fixture file would hold.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let rows: Vec<Value> =
            serde_json::from_str(raw).map_err(|e| StoreError::malformed(e.to_string()))?;
        Ok(Self::new(problems_from_rows(rows)?))
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    fn ensure_reachable(&self) -> Result<(), StoreError> {
        if self.reachable {
            Ok(())
        } else {
            Err(StoreError::unavailable("in-memory store marked unreachable"))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProblemStore for InMemoryStore {
    async fn fetch(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError> {
        self.ensure_reachable()?;

        let matching = self.problems.iter().filter(|p| match filter {
            ProblemFilter::All => true,
            ProblemFilter::Id(id) => p.id.matches(id),
            ProblemFilter::Category(category) => p.category == *category,
        });
        Ok(matching.cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_reachable()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
