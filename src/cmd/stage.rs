use clap::{Parser, ValueEnum};

/// Which half of a stage this process invocation plays.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Role {
    /// Read input records, emit keyed records for the external sort.
    Map,
    /// Read key-grouped records, emit aggregated or filtered records.
    Reduce,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Name of the pipeline stage to run
    #[clap(short, long)]
    pub workload: String,

    /// Role this invocation plays within the stage
    #[clap(short, long, value_enum)]
    pub role: Role,
}
