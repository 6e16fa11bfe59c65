//! Resource catalogue
//!
//! Each resource is a unit type implementing [`Resource`]: a static
//! [`Descriptor`] (table, identity column, required subset, messages) plus
//! two payload types, the full [`Record`] used for create and reads, and the
//! [`Changeset`] accepted by update. The HTTP layer and the repository are
//! generic over this trait, so adding a table means adding one module here.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Patch, Scalar};

pub mod inventory;
pub mod inventory_reports;
pub mod invoices;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod sales;
pub mod surveys;
pub mod users;

pub use inventory::Inventory;
pub use inventory_reports::InventoryReports;
pub use invoices::Invoices;
pub use notifications::Notifications;
pub use orders::Orders;
pub use products::Products;
pub use sales::Sales;
pub use surveys::Surveys;
pub use users::Users;

/// Client-facing messages for one resource.
///
/// Errors are sent as `{"error": ...}`, successes as `{"message": ...}`.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub list_failed: &'static str,
    pub not_found: &'static str,
    pub get_failed: &'static str,
    pub invalid: &'static str,
    pub create_failed: &'static str,
    pub update_not_found: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub delete_not_found: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

/// A column holding a secret that is hashed before it is stored.
#[derive(Debug, Clone, Copy)]
pub struct Credential {
    pub column: &'static str,
    /// Key the hashed value is echoed under in the create response.
    pub response_field: &'static str,
}

/// Static description of one table-backed resource.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Path segment under `/api`
    pub path: &'static str,
    pub table: &'static str,
    /// Primary key column, supplied by the client on create
    pub identity: &'static str,
    /// Columns that must be truthy on create
    pub required: &'static [&'static str],
    pub credential: Option<Credential>,
    pub messages: Messages,
}

/// Full row shape: create payload and read result.
pub trait Record: Serialize + DeserializeOwned + Send + 'static {
    /// Every column, identity first, in insert order.
    const COLUMNS: &'static [&'static str];

    /// Consume into `(column, value)` pairs in [`Self::COLUMNS`] order.
    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)>;
}

/// Update payload: every updatable column as a [`Patch`].
pub trait Changeset: DeserializeOwned + Send + 'static {
    const COLUMNS: &'static [&'static str];

    fn into_patches(self) -> Vec<(&'static str, Patch)>;
}

pub trait Resource: Send + Sync + 'static {
    type Record: Record;
    type Changes: Changeset;

    const DESCRIPTOR: Descriptor;
}
