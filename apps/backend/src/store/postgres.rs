//! Direct Postgres backend.
//!
//! Rows are rendered by the database with `row_to_json`, so columns beyond
//! `id` and `category` pass through without a fixed entity schema.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use serde_json::Value;

use crate::config::PostgresConfig;
use crate::domain::problem::{problems_from_rows, Problem};
use crate::errors::StoreError;
use crate::store::{ProblemFilter, ProblemStore};

pub struct PostgresStore {
    db: DatabaseConnection,
    collection: String,
}

impl PostgresStore {
    /// Open a lazily connecting pool; the first query establishes connections.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StoreError> {
        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.connect_lazy(true)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(opts).await?;
        Ok(Self::from_connection(db, &config.collection))
    }

    pub fn from_connection(db: DatabaseConnection, collection: &str) -> Self {
        Self {
            db,
            collection: collection.to_string(),
        }
    }
}

/// SQL and bound values for `filter`. The collection name is validated as a
/// plain identifier when configuration is loaded.
pub fn select_statement(collection: &str, filter: &ProblemFilter) -> Statement {
    let base = format!(r#"SELECT row_to_json(t)::text AS record FROM "{collection}" t"#);

    match filter {
        ProblemFilter::All => Statement::from_string(DatabaseBackend::Postgres, base),
        ProblemFilter::Id(id) => Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("{base} WHERE t.id::text = $1"),
            [id.clone().into()],
        ),
        ProblemFilter::Category(category) => Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("{base} WHERE t.category = $1"),
            [category.clone().into()],
        ),
    }
}

#[async_trait]
impl ProblemStore for PostgresStore {
    async fn fetch(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StoreError> {
        let rows = self
            .db
            .query_all(select_statement(&self.collection, filter))
            .await?;

        let records = rows
            .iter()
            .map(|row| {
                let raw: String = row.try_get("", "record")?;
                serde_json::from_str::<Value>(&raw)
                    .map_err(|e| StoreError::malformed(e.to_string()))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        problems_from_rows(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .query_one(Statement::from_string(
                DatabaseBackend::Postgres,
                format!(r#"SELECT 1 AS ok FROM "{}" LIMIT 1"#, self.collection),
            ))
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
