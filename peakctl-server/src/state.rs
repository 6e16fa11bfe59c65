//! Application state shared across handlers

use std::sync::Arc;

use crate::credentials::CredentialHasher;
use crate::db::QueryExecutor;

/// Shared application state
///
/// Holds the two injected collaborators. Built once at startup; cloning is
/// a reference-count bump.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    executor: Arc<dyn QueryExecutor>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AppState {
    pub fn new(executor: Arc<dyn QueryExecutor>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { executor, hasher }),
        }
    }

    pub fn executor(&self) -> &dyn QueryExecutor {
        self.inner.executor.as_ref()
    }

    pub fn hasher(&self) -> &dyn CredentialHasher {
        self.inner.hasher.as_ref()
    }
}
