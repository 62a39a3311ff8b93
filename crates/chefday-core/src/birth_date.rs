//! Birth dates as served by the upstream, and their display format.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Display pattern: two-digit day, abbreviated month, four-digit year.
pub const DISPLAY_FORMAT: &str = "%d/%b/%Y";

/// A birth date kept exactly as received.
///
/// The upstream has served both plain dates (`1996-5-30`, unpadded) and
/// full timestamps, so interpretation is deferred to [`BirthDate::to_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(String);

impl BirthDate {
    /// Wrap a raw textual date.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the raw text as a calendar date.
    ///
    /// Tries RFC 3339 timestamps, then naive `T`-separated timestamps, then
    /// plain `Y-M-D` dates. Timestamps keep the date as written, without
    /// shifting into the local time zone.
    pub fn to_date(&self) -> Result<NaiveDate, DomainError> {
        let raw = self.0.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(timestamp.date_naive());
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(timestamp.date());
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| DomainError::invalid_birth_date(&self.0))
    }

    /// Render as `DD/Mon/YYYY`, e.g. `24/Jul/1996`.
    pub fn format(&self) -> Result<String, DomainError> {
        Ok(self.to_date()?.format(DISPLAY_FORMAT).to_string())
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}
