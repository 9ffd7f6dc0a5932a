//! Problem records as served by the API.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::StoreError;

/// Identifier of a problem. Stores may key problems by text (`"two-sum"`) or
/// by integer primary key; both are carried as stored and serialised back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemId {
    Int(i64),
    Text(String),
}

impl ProblemId {
    /// Exact match against an identifier taken from a request path.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ProblemId::Text(s) => s == raw,
            ProblemId::Int(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
        }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemId::Int(n) => write!(f, "{n}"),
            ProblemId::Text(s) => f.write_str(s),
        }
    }
}

/// One coding challenge. Only `id` and `category` are interpreted here;
/// everything else (title, statement, difficulty, ...) is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub category: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Problem {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProblemId::Text(id.into()),
            category: category.into(),
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl TryFrom<Value> for Problem {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(StoreError::malformed(format!(
                "expected a JSON object, got {value}"
            )));
        }
        serde_json::from_value(value).map_err(|e| StoreError::malformed(e.to_string()))
    }
}

/// Map a batch of raw store rows, failing on the first malformed one.
pub fn problems_from_rows(rows: Vec<Value>) -> Result<Vec<Problem>, StoreError> {
    rows.into_iter().map(Problem::try_from).collect()
}
