//! Query executor port
//!
//! Handlers never see a pool or a connection. They hand a query template
//! with `?` placeholders and an ordered parameter list to a
//! [`QueryExecutor`], and get back either rows or an [`Outcome`].

use async_trait::async_trait;

use crate::models::Scalar;

/// One result row: column name to JSON value, in select-list order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Result of a statement that does not return rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub rows_affected: u64,
    /// Id generated by the store, `None` when it reported none (zero).
    pub last_insert_id: Option<u64>,
}

impl Outcome {
    pub fn affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            last_insert_id: None,
        }
    }

    pub fn inserted(last_insert_id: u64) -> Self {
        Self {
            rows_affected: 1,
            last_insert_id: Some(last_insert_id).filter(|id| *id != 0),
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("cannot decode column '{column}' of type {type_name}")]
    Decode {
        column: String,
        type_name: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("row does not match the {resource} record shape: {source}")]
    Shape {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The store cannot take statements at all (pool shut down, or a test
    /// double told to fail).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Executes single statements against the store.
///
/// Implementations own connection handling: each call acquires whatever it
/// needs and releases it before returning, on success and failure alike.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a statement that returns rows.
    async fn fetch(&self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DbError>;

    /// Run a statement that modifies rows.
    async fn execute(&self, sql: &str, params: &[Scalar]) -> Result<Outcome, DbError>;

    /// Round-trip to the store without touching any table.
    async fn ping(&self) -> Result<(), DbError> {
        self.fetch("SELECT 1", &[]).await.map(|_| ())
    }

    /// Release pooled resources. Called once at shutdown.
    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_insert_id_means_none() {
        assert_eq!(Outcome::inserted(0).last_insert_id, None);
        assert_eq!(Outcome::inserted(10).last_insert_id, Some(10));
    }
}
