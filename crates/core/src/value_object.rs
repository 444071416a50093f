//! Value objects stored on records: file names and store dates.
//!
//! Both are compared by value and kept exactly as the store returns them;
//! interpretation happens on demand.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Name of a file stored against a record (not a URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The store reports an unset file field as an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for FileName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Date string as emitted by the store (`2024-05-01 09:30:00.000Z`).
///
/// Kept as the raw string so record deserialization never fails; parse it on
/// demand with [`IsoDate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDate(String);

const STORE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.fZ";

impl IsoDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse store format first, then RFC 3339.
    pub fn parse(&self) -> SchemaResult<DateTime<Utc>> {
        let raw = self.0.trim();
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, STORE_DATE_FORMAT) {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| SchemaError::invalid_date(format!("{raw:?}: {e}")))
    }

    /// `None` for the empty (unset) value, otherwise the parse result.
    pub fn parse_opt(&self) -> SchemaResult<Option<DateTime<Utc>>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.parse().map(Some)
    }
}

impl From<DateTime<Utc>> for IsoDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.format("%Y-%m-%d %H:%M:%S%.3fZ").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_store_date_format() {
        let dt = IsoDate::new("2024-05-01 09:30:15.250Z").parse().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.second(), 15);
    }

    #[test]
    fn parses_rfc3339() {
        let dt = IsoDate::new("2024-05-01T09:30:00+02:00").parse().unwrap();
        assert_eq!(dt.hour(), 7);
    }

    #[test]
    fn empty_date_is_absent_not_an_error() {
        assert_eq!(IsoDate::default().parse_opt().unwrap(), None);
        assert!(matches!(
            IsoDate::new("yesterday").parse_opt(),
            Err(SchemaError::InvalidDate(_))
        ));
    }

    #[test]
    fn formats_back_into_store_format() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
        let date = IsoDate::from(dt);
        assert_eq!(date.as_str(), "2023-12-31 23:59:58.000Z");
        assert_eq!(date.parse().unwrap(), dt);
    }

    #[test]
    fn file_names_compare_by_value() {
        assert_eq!(FileName::new("a.jpg"), FileName::from("a.jpg"));
        assert!(FileName::default().is_empty());
    }
}
