//! Scalar field values
//!
//! Every resource column carries one of these. Payloads are flat maps of
//! scalars; nested objects and arrays fail to deserialize.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single column value as it travels over the wire and into the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Truthiness as required-field checks understand it.
    ///
    /// `null`, `false`, `0`, `0.0`, `NaN` and `""` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Convert into a JSON value for response bodies.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Value::from(*f),
            Self::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// One field of an update body.
///
/// Distinguishes a key the caller left out (`Absent`) from a key sent with
/// an explicit `null` (`Set(Scalar::Null)`). Use with `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch {
    #[default]
    Absent,
    Set(Scalar),
}

impl Patch {
    pub fn into_set(self) -> Option<Scalar> {
        match self {
            Self::Absent => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<'de> Deserialize<'de> for Patch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer).map(Self::Set)
    }
}

/// Deserializer for record fields: an explicit `null` is a present value.
///
/// Plain `Option<Scalar>` maps `null` to `None`, which would make a
/// submitted `null` indistinguishable from an omitted key. Pair with
/// `#[serde(default)]` so omitted keys still become `None`.
pub fn nullable<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Some)
}
