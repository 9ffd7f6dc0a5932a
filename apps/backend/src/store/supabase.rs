//! Supabase REST (PostgREST) backend.
//!
//! Reads go to `GET {url}/rest/v1/{collection}` with the access key sent both
//! as `apikey` and as a bearer token, and exact-match filters expressed as
//! `column=eq.value` query pairs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::SupabaseConfig;
use crate::domain::problem::{problems_from_rows, Problem};
use crate::errors::StoreError;
use crate::store::{ProblemFilter, ProblemStore};

pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.key)
            .map_err(|_| StoreError::query("access key is not a valid header value"))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|_| StoreError::query("access key is not a valid header value"))?;
        bearer.set_sensitive(true);
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.collection
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_rows(&self, query: &[(&str, String)]) -> Result<Rows, StoreError> {
        let resp = self.client.get(&self.endpoint).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            if status == StatusCode::BAD_REQUEST
                && pg_error_code(&body).as_deref() == Some(INVALID_TEXT_REPRESENTATION)
            {
                return Ok(Rows::InvalidLiteral(body));
            }
            return Err(StoreError::query(format!("{status}: {body}")));
        }

        Ok(Rows::Found(resp.json::<Vec<Value>>().await?))
    }
}

/// Outcome of a successful round trip to PostgREST.
enum Rows {
    Found(Vec<Value>),
    /// The filter value cannot be cast to the column type, e.g. `id=eq.abc`
    /// on a `bigint` key. Holds the response body.
    InvalidLiteral(String),
}

/// Postgres `invalid_text_representation`.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

fn pg_error_code(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("code")?.as_str().map(str::to_string)
}

/// Query pairs for `filter`, PostgREST syntax.
pub fn filter_query(filter: &ProblemFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![("select", "*".to_string())];
    match filter {
        ProblemFilter::All => {}
        ProblemFilter::Id(id) => query.push(("id", format!("eq.{id}"))),
        ProblemFilter::Category(category) => query.push(("category", format!("eq.{category}"))),
    }
    query
}

#[async_trait]
impl ProblemStore for SupabaseStore {
    async fn fetch(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError> {
        let rows = match self.get_rows(&filter_query(filter)).await? {
            Rows::Found(rows) => rows,
            // No row can hold an id of the wrong type, so nothing matches.
            Rows::InvalidLiteral(_) if matches!(filter, ProblemFilter::Id(_)) => Vec::new(),
            Rows::InvalidLiteral(body) => {
                return Err(StoreError::query(format!("400 Bad Request: {body}")))
            }
        };
        tracing::debug!(rows = rows.len(), ?filter, "supabase fetch");
        problems_from_rows(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match self
            .get_rows(&[("select", "id".to_string()), ("limit", "1".to_string())])
            .await?
        {
            Rows::Found(_) => Ok(()),
            Rows::InvalidLiteral(body) => Err(StoreError::query(body)),
        }
    }

    fn backend(&self) -> &'static str {
        "supabase"
    }
}
