//! Single-pass run loops driving a stage over its input stream.
//!
//! One loop per role. Both are generic over the reader and writer so tests
//! can inject in-memory buffers instead of stdio. A stage either runs to
//! natural end of stream or fails fatally on the first malformed line; there
//! is no skip-and-continue.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::{Mapper, Reducer};

/// Line counts for one stage run, reported in the binary's closing log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageStats {
    pub lines_in: u64,
    pub lines_out: u64,
}

/// Drive a mapper over `input` to completion.
///
/// Lines are trimmed before mapping. A blank line ends the input early;
/// that is the documented end-of-stream marker for mappers, not an error.
pub fn run_mapper<M>(mapper: &mut M, input: impl BufRead, mut output: impl Write) -> Result<StageStats>
where
    M: Mapper + ?Sized,
{
    let mut stats = StageStats::default();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        stats.lines_in += 1;
        if let Some(out) = mapper.map(line)? {
            writeln!(output, "{out}")?;
            stats.lines_out += 1;
        }
    }
    Ok(stats)
}

/// Drive a reducer over `input` to completion, flushing the pending group
/// once the stream ends.
pub fn run_reducer<R>(reducer: &mut R, input: impl BufRead, mut output: impl Write) -> Result<StageStats>
where
    R: Reducer + ?Sized,
{
    let mut stats = StageStats::default();
    for line in input.lines() {
        let line = line?;
        stats.lines_in += 1;
        if let Some(out) = reducer.reduce(line.trim())? {
            writeln!(output, "{out}")?;
            stats.lines_out += 1;
        }
    }
    if let Some(out) = reducer.finish() {
        writeln!(output, "{out}")?;
        stats.lines_out += 1;
    }
    Ok(stats)
}
