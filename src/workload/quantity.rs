//! Stage 2: move-quantity metric and bot filtering.
//!
//! The mapper derives, per user span, how many 5-minute buckets the span
//! could at most have touched; the reducer drops records whose shape looks
//! bot-like or statistically meaningless.

use crate::error::Result;
use crate::schema::{MoveQuantity, UserSpan};
use crate::{Mapper, Reducer};

/// Fixed bucket width used for the theoretical move maximum: 5 minutes.
const BUCKET_MS: i64 = 5 * 60 * 1000;

/// Maps `user \t min#max \t moves` to `user \t diff \t max_moves \t moves`.
pub struct QuantityMapper;

impl QuantityMapper {
    pub fn new() -> Self {
        QuantityMapper
    }

    /// Number of bucket boundaries a span of `diff_ts` milliseconds can
    /// cross, plus the bucket it starts in. A zero-width span touches one.
    fn max_moves(diff_ts: i64) -> i64 {
        diff_ts / BUCKET_MS + 1
    }
}

impl Mapper for QuantityMapper {
    fn map(&mut self, line: &str) -> Result<Option<String>> {
        let span = UserSpan::parse(line)?;
        let diff_ts = span.max_ts - span.min_ts;
        let quantity = MoveQuantity {
            user_id: span.user_id,
            diff_ts,
            max_moves: Self::max_moves(diff_ts),
            moves: span.moves,
        };
        Ok(Some(quantity.to_string()))
    }
}

/// Per-record filter over [`MoveQuantity`] lines; no cross-record state.
///
/// A record is suppressed when any of these hold:
/// - `diff_ts == 0`: all activity in a single instant;
/// - `max_moves - moves > 2`: mostly idle relative to its span;
/// - `moves < 5`: too few moves to be meaningful.
///
/// Everything else passes through unchanged.
pub struct QuantityReducer;

impl QuantityReducer {
    pub fn new() -> Self {
        QuantityReducer
    }

    fn is_suppressed(q: &MoveQuantity) -> bool {
        q.diff_ts == 0 || q.max_moves - q.moves > 2 || q.moves < 5
    }
}

impl Reducer for QuantityReducer {
    fn reduce(&mut self, line: &str) -> Result<Option<String>> {
        let quantity = MoveQuantity::parse(line)?;
        if Self::is_suppressed(&quantity) {
            return Ok(None);
        }
        Ok(Some(quantity.to_string()))
    }

    fn finish(&mut self) -> Option<String> {
        None
    }
}
