//! Generic single-table repository
//!
//! One repository type serves every resource: the table, identity column
//! and column lists all come from the [`Resource`] implementation.

use std::marker::PhantomData;

use super::executor::{DbError, Outcome, QueryExecutor, Row};
use super::statements::{self, Statement};
use crate::models::Scalar;
use crate::resources::{Record, Resource};

/// Repository over the table behind `R`.
pub struct ResourceRepo<'a, R> {
    executor: &'a dyn QueryExecutor,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceRepo<'a, R> {
    pub fn new(executor: &'a dyn QueryExecutor) -> Self {
        Self {
            executor,
            _resource: PhantomData,
        }
    }

    /// All rows, in whatever order the store returns them.
    pub async fn list(&self) -> Result<Vec<R::Record>, DbError> {
        let d = R::DESCRIPTOR;
        let stmt = statements::select_all(d.table, <R::Record as Record>::COLUMNS);
        let rows = self.fetch(stmt).await?;
        rows.into_iter().map(decode::<R>).collect()
    }

    /// The row whose identity equals `id`, compared by the store.
    pub async fn get(&self, id: &str) -> Result<Option<R::Record>, DbError> {
        let d = R::DESCRIPTOR;
        let stmt = statements::select_one(d.table, <R::Record as Record>::COLUMNS, d.identity, id);
        let rows = self.fetch(stmt).await?;
        rows.into_iter().next().map(decode::<R>).transpose()
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbError> {
        let d = R::DESCRIPTOR;
        let rows = self.fetch(statements::exists(d.table, d.identity, id)).await?;
        Ok(!rows.is_empty())
    }

    /// Insert one row with the given columns.
    pub async fn insert(&self, values: &[(&str, Scalar)]) -> Result<Outcome, DbError> {
        self.execute(statements::insert(R::DESCRIPTOR.table, values))
            .await
    }

    /// Update the given columns of one row. Returns the affected row count.
    pub async fn update(&self, id: &str, values: &[(&str, Scalar)]) -> Result<u64, DbError> {
        let d = R::DESCRIPTOR;
        let outcome = self
            .execute(statements::update(d.table, d.identity, id, values))
            .await?;
        Ok(outcome.rows_affected)
    }

    /// Delete one row. Returns the affected row count.
    pub async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let d = R::DESCRIPTOR;
        let outcome = self
            .execute(statements::delete(d.table, d.identity, id))
            .await?;
        Ok(outcome.rows_affected)
    }

    async fn fetch(&self, stmt: Statement) -> Result<Vec<Row>, DbError> {
        self.executor.fetch(&stmt.sql, &stmt.params).await
    }

    async fn execute(&self, stmt: Statement) -> Result<Outcome, DbError> {
        self.executor.execute(&stmt.sql, &stmt.params).await
    }
}

fn decode<R: Resource>(row: Row) -> Result<R::Record, DbError> {
    serde_json::from_value(serde_json::Value::Object(row)).map_err(|source| DbError::Shape {
        resource: R::DESCRIPTOR.path,
        source,
    })
}
