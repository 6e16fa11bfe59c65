//! MySQL adapter for [`QueryExecutor`]
//!
//! Rows are decoded column by column from the MySQL type reported for the
//! result set, so callers can select any column list without a `FromRow`
//! struct per query.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlColumn, MySqlPool, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row as _, TypeInfo, ValueRef};

use super::executor::{DbError, Outcome, QueryExecutor, Row};
use crate::models::Scalar;

/// Executor backed by a sqlx MySQL pool.
///
/// Every call runs on a connection checked out of the pool for that single
/// statement; the pool guard returns it when the call ends.
#[derive(Clone)]
pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn ensure_open(&self) -> Result<(), DbError> {
        if self.pool.is_closed() {
            return Err(DbError::Unavailable("connection pool is closed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QueryExecutor for MySqlExecutor {
    async fn fetch(&self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DbError> {
        self.ensure_open()?;
        let rows = bind_all(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, sql: &str, params: &[Scalar]) -> Result<Outcome, DbError> {
        self.ensure_open()?;
        let result = bind_all(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;

        Ok(Outcome {
            rows_affected: result.rows_affected(),
            last_insert_id: Some(result.last_insert_id()).filter(|id| *id != 0),
        })
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.ensure_open()?;
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_all<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [Scalar],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            Scalar::Null => query.bind(None::<String>),
            Scalar::Bool(b) => query.bind(*b),
            Scalar::Int(i) => query.bind(*i),
            Scalar::Float(f) => query.bind(*f),
            Scalar::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}

fn decode_row(row: &MySqlRow) -> Result<Row, DbError> {
    let mut out = Row::new();
    for column in row.columns() {
        let value = decode_column(row, column).map_err(|source| DbError::Decode {
            column: column.name().to_owned(),
            type_name: column.type_info().name().to_owned(),
            source,
        })?;
        out.insert(column.name().to_owned(), value);
    }
    Ok(out)
}

fn decode_column(row: &MySqlRow, column: &MySqlColumn) -> Result<Value, sqlx::Error> {
    let index = column.ordinal();
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let type_name = column.type_info().name();
    let value = match type_name {
        "BOOLEAN" => Value::from(row.try_get::<bool, _>(index)?),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => {
            Value::from(row.try_get_unchecked::<i64, _>(index)?)
        }
        name if name.ends_with("UNSIGNED") => {
            Value::from(row.try_get_unchecked::<u64, _>(index)?)
        }
        "FLOAT" => Value::from(row.try_get::<f32, _>(index)?),
        "DOUBLE" => Value::from(row.try_get::<f64, _>(index)?),
        "DECIMAL" => {
            // Sent as text on the wire; numbers stay numbers for clients.
            let text = row.try_get_unchecked::<String, _>(index)?;
            match text.parse::<f64>() {
                Ok(number) => Value::from(number),
                Err(_) => Value::String(text),
            }
        }
        "DATE" => Value::String(
            row.try_get::<chrono::NaiveDate, _>(index)?
                .format("%Y-%m-%d")
                .to_string(),
        ),
        "DATETIME" | "TIMESTAMP" => Value::String(
            row.try_get::<chrono::NaiveDateTime, _>(index)?
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ),
        "TIME" => Value::String(
            row.try_get::<chrono::NaiveTime, _>(index)?
                .format("%H:%M:%S")
                .to_string(),
        ),
        _ => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };

    Ok(value)
}
