//! Record identifier types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of a single record
///
/// Depending on the backing store an id is an integer or a string; both forms
/// are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer primary key
    Int(i64),
    /// String primary key (slug, UUID, ...)
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Primary key type of a resource's records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// Integer ids; numeric strings are coerced
    #[default]
    Integer,
    /// Free-form string ids
    String,
}

impl IdType {
    /// Convert an incoming id into the canonical storage key for this id type.
    ///
    /// # Errors
    /// `CoreError::ValidationError` when an integer store receives a non-numeric string.
    pub fn to_storage_key(self, id: &RecordId) -> CoreResult<String> {
        match (self, id) {
            (_, RecordId::Int(n)) => Ok(n.to_string()),
            (Self::String, RecordId::Str(s)) => Ok(s.clone()),
            (Self::Integer, RecordId::Str(s)) => s
                .trim()
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|_| {
                    CoreError::ValidationError(format!(
                        "Field 'id' expected a number but got '{s}'."
                    ))
                }),
        }
    }

    /// Rebuild a typed id from a storage key.
    #[must_use]
    pub fn from_storage_key(self, key: &str) -> RecordId {
        match self {
            Self::Integer => key
                .parse::<i64>()
                .map_or_else(|_| RecordId::Str(key.to_string()), RecordId::Int),
            Self::String => RecordId::Str(key.to_string()),
        }
    }
}
