//! peakctl-server: REST backend for PeakPerformance
//!
//! Nine table-backed resources (surveys, invoices, inventory reports,
//! inventory, notifications, orders, products, users, sales) exposed as
//! uniform CRUD endpoints under `/api` over a MySQL store.

pub mod credentials;
pub mod db;
pub mod http;
pub mod models;
pub mod resources;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use credentials::{Argon2Hasher, CredentialHasher, HashError};
pub use db::{create_pool, DbError, MySqlExecutor, QueryExecutor};
pub use http::{build_router, run_server, CorsPolicy, ServerConfig, ServerError};
pub use state::AppState;
