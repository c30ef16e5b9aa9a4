//! Low-level helpers for the line formats exchanged between stages.
//!
//! Every inter-stage record is a single line of separator-delimited text.
//! Each stage declares an exact field count and digits-only content for its
//! numeric slots; anything else is a [`DataError::LineFormat`]. The helpers
//! here do the splitting and validation so the per-record parsers in
//! [`crate::schema`] stay declarative.

use crate::error::{DataError, Result};

/// Separator for raw canvas event input.
pub const EVENT_SEP: char = ',';
/// Separator for all inter-stage record formats.
pub const FIELD_SEP: char = '\t';
/// Separator joining the two halves of a composite `min#max` timestamp pair.
pub const TS_PAIR_SEP: char = '#';

/// True if `s` is non-empty and consists only of ASCII digits.
///
/// Mirrors the digit predicate every numeric slot is validated with; signs,
/// whitespace and empty strings all fail.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split `line` on `sep` and require exactly `count` fields.
pub fn split_exact(line: &str, sep: char, count: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(sep).collect();
    if fields.len() != count {
        return Err(DataError::line_format(
            format!("line should have {count} fields"),
            line,
        ));
    }
    Ok(fields)
}

/// Parse a digits-only numeric field, naming the field in the error.
pub fn digit_field(field: &str, what: &str, line: &str) -> Result<i64> {
    if !is_digits(field) {
        return Err(DataError::line_format(
            format!("{what} should be an integer"),
            line,
        ));
    }
    field
        .parse::<i64>()
        .map_err(|_| DataError::line_format(format!("{what} is out of range"), line))
}

/// Split a composite `min#max` timestamp pair into its two halves.
///
/// The pair must split into exactly two digit strings.
pub fn ts_pair(field: &str, line: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = field.split(TS_PAIR_SEP).collect();
    let &[min, max] = parts.as_slice() else {
        return Err(DataError::line_format(
            format!("timestamp should be separated by '{TS_PAIR_SEP}'"),
            line,
        ));
    };
    Ok((
        digit_field(min, "min timestamp", line)?,
        digit_field(max, "max timestamp", line)?,
    ))
}
