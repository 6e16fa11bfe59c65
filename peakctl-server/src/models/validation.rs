//! Validation error types

use std::fmt;

use super::Scalar;

/// Validation error for create payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or `null`
    Missing { field: &'static str },

    /// Required field present but falsy (`""`, `0`, `false`)
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that every `required` column carries a truthy value.
///
/// Reports the first offending column in `fields` order.
pub fn require_present(
    fields: &[(&'static str, Option<Scalar>)],
    required: &[&'static str],
) -> Result<(), ValidationError> {
    for (column, value) in fields {
        if !required.contains(column) {
            continue;
        }
        match value {
            None | Some(Scalar::Null) => return Err(ValidationError::Missing { field: *column }),
            Some(v) if !v.is_truthy() => return Err(ValidationError::Empty { field: *column }),
            Some(_) => {}
        }
    }
    Ok(())
}
