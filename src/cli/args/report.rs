//! Arguments for the report command

/// Options for computing a reporting structure
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    /// Employee at the top of the structure
    pub employee_id: String,

    /// Maximum number of lookups in flight (overrides max_worker_threads)
    #[arg(long, env = "ROSTER_MAX_WORKERS", hide_env = true)]
    pub max_workers: Option<usize>,

    /// Cancel the computation after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Also run a sequential walk and compare timings
    #[arg(long)]
    pub compare: bool,
}
