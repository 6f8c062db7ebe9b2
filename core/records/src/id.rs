//! FILENAME: core/records/src/id.rs
//! PURPOSE: Record identifiers.
//! CONTEXT: Stored data carries either integer ids (seeded rosters) or
//! prefixed string ids (records created at runtime). Both forms must
//! survive a JSON round trip untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a record within its collection.
///
/// `1` and `"1"` are different ids; no coercion happens between the forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            RecordId::Number(n) => Some(*n),
            RecordId::Text(_) => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}
