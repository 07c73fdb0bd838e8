//! Report command implementation

use std::time::{Duration, Instant};

use colored::Colorize;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ReportArgs};
use crate::config::Config;
use crate::directory::EmployeeDirectory;
use crate::error::Result;
use crate::hierarchy::{CancelSignal, aggregate, aggregate_sequential, cancel_channel};
use crate::output::Formattable;

/// Run the report command
///
/// The computation is cancelled on Ctrl-C or when the timeout elapses.
pub async fn run(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (workers, timeout) = budget(args, &ctx.config);

    let root = ctx.store.lookup_employee(&args.employee_id).await?;

    let (signal, _watchers) = watch_for_cancel(timeout);

    let started = Instant::now();
    let structure = aggregate(&ctx.store, root.clone(), workers, &signal).await?;
    let elapsed = started.elapsed();
    info!("Async Elapsed Time: {:?}", elapsed);

    if args.compare {
        let started = Instant::now();
        let sequential = aggregate_sequential(&ctx.store, root, &signal).await?;
        let sequential_elapsed = started.elapsed();
        info!("Sync Elapsed Time: {:?}", sequential_elapsed);

        if sequential != structure {
            warn!(
                "Sequential and concurrent results differ for [{}]",
                args.employee_id
            );
        }

        eprintln!(
            "{} {:?} ({} workers)\n{} {:?}",
            "Concurrent:".bold(),
            elapsed,
            workers,
            "Sequential:".bold(),
            sequential_elapsed
        );
    }

    structure.print(ctx.format)
}

/// Background tasks that fire a report's cancel signal, aborted on drop.
struct CancelWatchers {
    tasks: Vec<JoinHandle<()>>,
}

impl Drop for CancelWatchers {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Signal that fires on Ctrl-C or once `timeout` elapses.
///
/// Both runs of `--compare` share it, so it must outlive them.
fn watch_for_cancel(timeout: Option<Duration>) -> (CancelSignal, CancelWatchers) {
    let (handle, signal) = cancel_channel();
    let mut tasks = Vec::new();

    if let Some(timeout) = timeout {
        debug!("Report deadline set to {:?}", timeout);
        tasks.push(handle.cancel_after(timeout));
    }
    tasks.push(tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling report");
            handle.cancel();
        }
    }));

    (signal, CancelWatchers { tasks })
}

/// Worker budget and deadline, with command-line values taking precedence
fn budget(args: &ReportArgs, config: &Config) -> (usize, Option<Duration>) {
    let workers = args.max_workers.unwrap_or(config.max_worker_threads);
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .or_else(|| config.report_timeout());
    (workers, timeout)
}
