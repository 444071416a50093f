//! Schema error model.

use thiserror::Error;

/// Result type used when parsing schema-level values.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema-level error.
///
/// Raised only by explicit parsing entry points (`FromStr`, `parse`). Record
/// deserialization and view-model mapping stay lenient and never produce it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A collection name that the catalog does not know.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// A select field value outside its option set.
    #[error("invalid value {value:?} for {field}")]
    UnknownOption { field: &'static str, value: String },

    /// An identifier was invalid (e.g. empty or with forbidden characters).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A date string that is neither store format nor RFC 3339.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl SchemaError {
    pub fn unknown_collection(name: impl Into<String>) -> Self {
        Self::UnknownCollection(name.into())
    }

    pub fn unknown_option(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }
}
