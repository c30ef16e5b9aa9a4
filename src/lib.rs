//! Line-oriented map and reduce stages for canvas clickstream aggregation.
//!
//! Each stage is a small synchronous program meant to run under an external
//! distributed-batch harness (Hadoop-streaming style): it reads
//! newline-delimited records on stdin, writes transformed records on stdout,
//! and relies on the harness to shuffle and sort mapper output by key before
//! a reducer sees it. The pipeline turns raw per-move canvas events into
//! per-user activity summaries, derives a moves-per-5-minute-bucket metric,
//! filters out bot-like users, and finally re-keys the output so an external
//! text sort can rank users by move count.

use crate::error::Result;

pub mod cmd;
pub mod codec;
pub mod engine;
pub mod error;
pub mod schema;
pub mod utils;
pub mod workload;

/////////////////////////////////////////////////////////////////////////////
// Stage traits
/////////////////////////////////////////////////////////////////////////////

/// A map stage: transforms one input line into zero or one output lines,
/// stateless across lines.
///
/// Returning `Ok(None)` means the line was consumed without output (dropped
/// or recognized as a header); an `Err` is fatal to the whole pass.
pub trait Mapper {
    fn map(&mut self, line: &str) -> Result<Option<String>>;
}

/// A reduce stage: consumes a key-grouped stream and may flush a completed
/// record on each input line and once more at end of stream.
///
/// Grouped aggregation keeps one in-progress group as internal state;
/// per-record filters keep none and never flush at the end.
pub trait Reducer {
    /// Consume one line, optionally yielding a record completed by it.
    fn reduce(&mut self, line: &str) -> Result<Option<String>>;

    /// Flush whatever group is still in progress at end of stream.
    fn finish(&mut self) -> Option<String>;
}

/////////////////////////////////////////////////////////////////////////////
// Stage registration
/////////////////////////////////////////////////////////////////////////////

/// A pipeline stage: one mapper/reducer pair.
///
/// A process invocation plays exactly one of the two roles, so the pair is
/// carried as constructors rather than instances. Building the mapper can
/// fail (the event mapper resolves its epoch constant at construction).
pub struct Workload {
    pub mapper: fn() -> Result<Box<dyn Mapper>>,
    pub reducer: fn() -> Box<dyn Reducer>,
}
