//! Record identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Identifier of a record inside its collection.
///
/// The store generates 15-character lowercase alphanumeric ids, but custom ids
/// are allowed, so deserialization accepts any string. Use [`RecordId::parse`]
/// (or `FromStr`) for ids coming from untrusted input such as URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a value without validation (trusted store data, tests).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validate and wrap an id: non-empty, ASCII alphanumerics, `_` or `-`.
    pub fn parse(value: &str) -> Result<Self, SchemaError> {
        if value.is_empty() {
            return Err(SchemaError::invalid_id("RecordId: empty"));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(SchemaError::invalid_id(format!(
                "RecordId: unexpected character {c:?} in {value:?}"
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_generated_ids() {
        let id: RecordId = "a1b2c3d4e5f6g7h".parse().unwrap();
        assert_eq!(id.as_str(), "a1b2c3d4e5f6g7h");
        assert_eq!(id.to_string(), "a1b2c3d4e5f6g7h");
    }

    #[test]
    fn parse_rejects_empty_and_path_characters() {
        assert!(matches!(RecordId::parse(""), Err(SchemaError::InvalidId(_))));
        assert!(matches!(RecordId::parse("abc/../x"), Err(SchemaError::InvalidId(_))));
        assert!(matches!(RecordId::parse("abc def"), Err(SchemaError::InvalidId(_))));
    }

    #[test]
    fn deserialization_is_unchecked() {
        let id: RecordId = serde_json::from_str("\"with space\"").unwrap();
        assert_eq!(id.as_str(), "with space");
    }
}
