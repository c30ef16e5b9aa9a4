//! Stage 1: per-user activity aggregation.
//!
//! The mapper turns raw canvas events into user-keyed partial records; the
//! reducer merges each contiguous run of equal user ids into one summary.

use crate::error::Result;
use crate::schema::{CanvasMove, KeyedMove, UserSpan};
use crate::utils::str2timestamp;
use crate::{Mapper, Reducer};

/// The calendar instant of the first event in the dataset; raw event
/// timestamps are millisecond offsets from it.
const FIRST_TIME: &str = "2022-04-01 12:44:10.315";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Maps one raw event line to `user \t absolute_ts \t 1`.
///
/// Moderator actions are excluded from aggregation and produce no output.
pub struct UserMapper {
    first_ts_ms: i64,
}

impl UserMapper {
    pub fn new() -> Result<Self> {
        let first_ts = str2timestamp(FIRST_TIME, &DATETIME_FORMATS)?;
        Ok(UserMapper {
            first_ts_ms: first_ts * 1000,
        })
    }
}

impl Mapper for UserMapper {
    fn map(&mut self, line: &str) -> Result<Option<String>> {
        let Some(mv) = CanvasMove::parse(line, self.first_ts_ms)? else {
            return Ok(None); // CSV header
        };

        if mv.is_mod {
            return Ok(None);
        }

        let keyed = KeyedMove {
            user_id: mv.user_id,
            timestamp: mv.timestamp,
            count: 1,
        };
        Ok(Some(keyed.to_string()))
    }
}

/// Streaming grouped reduction of keyed moves into per-user spans.
///
/// Holds at most one in-progress [`UserSpan`]; a change of user id flushes
/// the completed span, and [`Reducer::finish`] flushes the last one. Correct
/// output requires records for one user to arrive contiguously (the external
/// shuffle/sort guarantees this); a key that reappears after its run closed
/// simply opens a fresh group and yields a second summary.
#[derive(Default)]
pub struct UserReducer {
    current: Option<UserSpan>,
}

impl UserReducer {
    pub fn new() -> Self {
        Self::default()
    }

    fn seed(mv: &KeyedMove) -> UserSpan {
        UserSpan {
            user_id: mv.user_id,
            min_ts: mv.timestamp,
            max_ts: mv.timestamp,
            moves: mv.count,
        }
    }

    fn absorb(span: &mut UserSpan, mv: &KeyedMove) {
        span.moves += mv.count;
        // A tying timestamp still replaces the stored bound.
        if mv.timestamp <= span.min_ts {
            span.min_ts = mv.timestamp;
        }
        if mv.timestamp >= span.max_ts {
            span.max_ts = mv.timestamp;
        }
    }
}

impl Reducer for UserReducer {
    fn reduce(&mut self, line: &str) -> Result<Option<String>> {
        let mv = KeyedMove::parse(line)?;
        match self.current.take() {
            Some(mut span) if span.user_id == mv.user_id => {
                Self::absorb(&mut span, &mv);
                self.current = Some(span);
                Ok(None)
            }
            Some(span) => {
                self.current = Some(Self::seed(&mv));
                Ok(Some(span.to_string()))
            }
            None => {
                self.current = Some(Self::seed(&mv));
                Ok(None)
            }
        }
    }

    fn finish(&mut self) -> Option<String> {
        self.current.take().map(|span| span.to_string())
    }
}
