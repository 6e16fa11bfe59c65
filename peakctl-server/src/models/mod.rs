//! Wire-level value types and create-time validation
//!
//! Payloads are deserialized into typed per-resource structs whose fields
//! are [`Scalar`]s. Required fields are checked once, before any query.

pub mod scalar;
pub mod validation;

pub use scalar::{nullable, Patch, Scalar};
pub use validation::{require_present, ValidationError};
