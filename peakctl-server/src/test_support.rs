//! In-memory doubles for the executor and hasher ports
//!
//! Compiled for this crate's tests and, via the `test-support` feature, for
//! integration tests. Replies are queued up front and consumed in call
//! order; every call is recorded so tests can assert what reached the store.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::credentials::{CredentialHasher, HashError};
use crate::db::{DbError, Outcome, QueryExecutor, Row};
use crate::models::Scalar;

/// A statement as the executor received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub params: Vec<Scalar>,
}

#[derive(Debug)]
enum Reply {
    Rows(Vec<Row>),
    Outcome(Outcome),
    Fail(String),
}

/// Executor double that replays queued replies and records calls.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
    fail_all: Option<String>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An executor whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_all: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn push_rows(&self, rows: Vec<Row>) -> &Self {
        lock(&self.replies).push_back(Reply::Rows(rows));
        self
    }

    pub fn push_outcome(&self, outcome: Outcome) -> &Self {
        lock(&self.replies).push_back(Reply::Outcome(outcome));
        self
    }

    pub fn push_failure(&self, message: &str) -> &Self {
        lock(&self.replies).push_back(Reply::Fail(message.to_owned()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    fn next(&self, sql: &str, params: &[Scalar]) -> Result<Reply, DbError> {
        lock(&self.calls).push(Call {
            sql: sql.to_owned(),
            params: params.to_vec(),
        });

        if let Some(message) = &self.fail_all {
            return Err(DbError::Unavailable(message.clone()));
        }

        match lock(&self.replies).pop_front() {
            Some(Reply::Fail(message)) => Err(DbError::Unavailable(message)),
            Some(reply) => Ok(reply),
            None => Err(DbError::Unavailable(format!("no reply queued for: {}", sql))),
        }
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn fetch(&self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DbError> {
        match self.next(sql, params)? {
            Reply::Rows(rows) => Ok(rows),
            other => Err(DbError::Unavailable(format!(
                "expected rows for '{}', queued {:?}",
                sql, other
            ))),
        }
    }

    async fn execute(&self, sql: &str, params: &[Scalar]) -> Result<Outcome, DbError> {
        match self.next(sql, params)? {
            Reply::Outcome(outcome) => Ok(outcome),
            other => Err(DbError::Unavailable(format!(
                "expected an outcome for '{}', queued {:?}",
                sql, other
            ))),
        }
    }
}

/// Hasher double producing `hashed_<plaintext>`.
#[derive(Debug, Default)]
pub struct PrefixHasher {
    seen: Mutex<Vec<String>>,
}

impl PrefixHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plaintexts passed to `hash`, in call order.
    pub fn seen(&self) -> Vec<String> {
        lock(&self.seen).clone()
    }
}

#[async_trait]
impl CredentialHasher for PrefixHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        lock(&self.seen).push(plaintext.to_owned());
        Ok(format!("hashed_{}", plaintext))
    }
}

/// Hasher double that always fails.
#[derive(Debug, Default)]
pub struct FailingHasher;

#[async_trait]
impl CredentialHasher for FailingHasher {
    async fn hash(&self, _plaintext: &str) -> Result<String, HashError> {
        Err(HashError::Hash("hasher unavailable".into()))
    }
}
