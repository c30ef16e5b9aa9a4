//! Record types exchanged between pipeline stages.
//!
//! Each type owns the exact line format it travels in: a `parse` constructor
//! that validates field count and digit content, and a [`std::fmt::Display`]
//! impl producing the canonical serialization consumed by the next stage.
//! Formats are position-fixed and tab-separated; only the rank-sort formats
//! zero-pad numeric fields (to width 10) so that an external *text* sort
//! orders them numerically.

use std::fmt;

use crate::codec::{self, EVENT_SEP, FIELD_SEP};
use crate::error::Result;

/// One raw move on the canvas, as found in the source CSV.
///
/// The input timestamp is a millisecond offset relative to the start of the
/// dataset; parsing rebases it onto `first_ts_ms` so downstream records carry
/// absolute epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasMove {
    pub timestamp: i64,
    pub user_id: i64,
    pub x: i64,
    pub y: i64,
    pub color: i64,
    pub is_mod: bool,
}

impl CanvasMove {
    /// Parse a comma-separated raw event line.
    ///
    /// Returns `Ok(None)` for a CSV header: a line whose six fields are all
    /// non-numeric. A line mixing numeric and non-numeric fields is ambiguous
    /// and rejected rather than guessed at.
    pub fn parse(line: &str, first_ts_ms: i64) -> Result<Option<Self>> {
        let fields = codec::split_exact(line, EVENT_SEP, 6)?;

        if fields.iter().all(|f| !codec::is_digits(f)) {
            return Ok(None);
        }

        let timestamp = codec::digit_field(fields[0], "timestamp", line)? + first_ts_ms;
        let user_id = codec::digit_field(fields[1], "user id", line)?;
        let x = codec::digit_field(fields[2], "x", line)?;
        let y = codec::digit_field(fields[3], "y", line)?;
        let color = codec::digit_field(fields[4], "color", line)?;
        let is_mod = codec::digit_field(fields[5], "mod flag", line)? != 0;

        Ok(Some(CanvasMove {
            timestamp,
            user_id,
            x,
            y,
            color,
            is_mod,
        }))
    }
}

/// A move keyed by user, as emitted by the event mapper.
///
/// `count` is always 1 at emission but is read back as a field so a combiner
/// run can pre-aggregate without changing the format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedMove {
    pub user_id: i64,
    pub timestamp: i64,
    pub count: i64,
}

impl KeyedMove {
    pub fn parse(line: &str) -> Result<Self> {
        let fields = codec::split_exact(line, FIELD_SEP, 3)?;
        Ok(KeyedMove {
            user_id: codec::digit_field(fields[0], "user id", line)?,
            timestamp: codec::digit_field(fields[1], "timestamp", line)?,
            count: codec::digit_field(fields[2], "count", line)?,
        })
    }
}

impl fmt::Display for KeyedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.user_id, self.timestamp, self.count)
    }
}

/// Per-user summary over one contiguous key run: timestamp span and move
/// count. Travels as `user \t min#max \t moves`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSpan {
    pub user_id: i64,
    pub min_ts: i64,
    pub max_ts: i64,
    pub moves: i64,
}

impl UserSpan {
    pub fn parse(line: &str) -> Result<Self> {
        let fields = codec::split_exact(line, FIELD_SEP, 3)?;
        let user_id = codec::digit_field(fields[0], "user id", line)?;
        let (min_ts, max_ts) = codec::ts_pair(fields[1], line)?;
        let moves = codec::digit_field(fields[2], "moves", line)?;
        Ok(UserSpan {
            user_id,
            min_ts,
            max_ts,
            moves,
        })
    }
}

impl fmt::Display for UserSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}#{}\t{}",
            self.user_id, self.min_ts, self.max_ts, self.moves
        )
    }
}

/// Derived windowed-rate record: span width, the theoretical maximum number
/// of 5-minute buckets that span touches, and the actual move count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveQuantity {
    pub user_id: i64,
    pub diff_ts: i64,
    pub max_moves: i64,
    pub moves: i64,
}

impl MoveQuantity {
    pub fn parse(line: &str) -> Result<Self> {
        let fields = codec::split_exact(line, FIELD_SEP, 4)?;
        Ok(MoveQuantity {
            user_id: codec::digit_field(fields[0], "user id", line)?,
            diff_ts: codec::digit_field(fields[1], "timestamp diff", line)?,
            max_moves: codec::digit_field(fields[2], "max moves", line)?,
            moves: codec::digit_field(fields[3], "moves", line)?,
        })
    }
}

impl fmt::Display for MoveQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.user_id, self.diff_ts, self.max_moves, self.moves
        )
    }
}

/// [`MoveQuantity`] transposed so `moves` leads the line and an external text
/// sort on the first field ranks users by move count. The two fields a text
/// sort may have to compare numerically are zero-padded to width 10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedQuantity {
    pub moves: i64,
    pub user_id: i64,
    pub diff_ts: i64,
    pub max_moves: i64,
}

impl RankedQuantity {
    pub fn parse(line: &str) -> Result<Self> {
        let fields = codec::split_exact(line, FIELD_SEP, 4)?;
        Ok(RankedQuantity {
            moves: codec::digit_field(fields[0], "moves", line)?,
            user_id: codec::digit_field(fields[1], "user id", line)?,
            diff_ts: codec::digit_field(fields[2], "timestamp diff", line)?,
            max_moves: codec::digit_field(fields[3], "max moves", line)?,
        })
    }
}

impl fmt::Display for RankedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:010}\t{}\t{:010}\t{}",
            self.moves, self.user_id, self.diff_ts, self.max_moves
        )
    }
}
