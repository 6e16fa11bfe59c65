//! Database layer - executor port, MySQL adapter and the resource repository
//!
//! # Design Principles
//!
//! - Handlers depend on [`QueryExecutor`], never on a pool
//! - One statement per call, connections released on every path
//! - Identity values bound as text; the store does any coercion
//! - No transactions: every operation touches a single row

pub mod executor;
pub mod mysql;
pub mod pool;
pub mod repo;
pub mod statements;

pub use executor::{DbError, Outcome, QueryExecutor, Row};
pub use mysql::MySqlExecutor;
pub use pool::{create_pool, create_pool_with_options};
pub use repo::ResourceRepo;
