//! Utility functions shared by the stage implementations.

use crate::error::{DataError, Result};
use chrono::NaiveDateTime;

/// Convert a calendar datetime string to epoch seconds (UTC).
///
/// The string must match one of the formats in `formats`; they are tried in
/// order and the first that parses wins. Sub-second precision is truncated.
///
/// Returns [`DataError::TimestampParse`] if no format matches.
pub fn str2timestamp(date: &str, formats: &[&str]) -> Result<i64> {
    for f in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, f) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    Err(DataError::TimestampParse(date.to_string()))
}
