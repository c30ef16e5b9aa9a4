//! Runs one mapper or reducer role over stdin/stdout.
//!
//! The external batch harness invokes this binary once per task, pipes the
//! (pre-sorted, for reducers) partition in on stdin, and collects records
//! from stdout. Logs go to stderr so the record stream stays clean.

use anyhow::Result;
use clap::Parser;
use mrplace::cmd::stage::{Args, Role};
use mrplace::engine::{run_mapper, run_reducer};
use mrplace::workload;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stage = workload::named(&args.workload)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let stats = match args.role {
        Role::Map => {
            let mut mapper = (stage.mapper)()?;
            run_mapper(mapper.as_mut(), stdin, stdout)?
        }
        Role::Reduce => {
            let mut reducer = (stage.reducer)();
            run_reducer(reducer.as_mut(), stdin, stdout)?
        }
    };

    info!(
        workload = %args.workload,
        role = ?args.role,
        lines_in = stats.lines_in,
        lines_out = stats.lines_out,
        "stage finished"
    );
    Ok(())
}
