//! The multi-threaded logging workload.

use crate::cli::RunArgs;
use anyhow::{anyhow, Context, Result};
use logrig_types::Severity;
use std::thread;
use tracing::info;

/// Order each worker walks the severities in.
const SEQUENCE: [Severity; 5] = [
    Severity::Error,
    Severity::Warn,
    Severity::Info,
    Severity::Debug,
    Severity::Trace,
];

pub fn execute(args: &RunArgs) -> Result<()> {
    let config = args.logging_config()?;
    logrig_core::configure(&config).context("Failed to configure logging")?;

    let threads = args.thread_count();
    let iterations = args.iterations;
    let direct = args.direct;

    let handles = (0..threads)
        .map(|worker| {
            thread::Builder::new()
                .name(format!("worker-{worker}"))
                .spawn(move || work(worker, iterations, direct))
                .context("Failed to spawn worker thread")
        })
        .collect::<Result<Vec<_>>>()?;

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))??;
    }

    info!(
        threads,
        iterations,
        statements = threads * iterations * SEQUENCE.len(),
        "Workload finished"
    );
    Ok(())
}

fn work(worker: usize, iterations: usize, direct: bool) -> logrig_types::Result<()> {
    let id = format!("{:?}", thread::current().id());

    for iteration in 0..iterations {
        for level in SEQUENCE {
            if direct {
                logrig_core::log(
                    &format!("worker-{worker} iteration-{iteration} thread {id}\n"),
                    level,
                )?;
            } else {
                logrig_core::line(level)?
                    .push("worker-")
                    .push(worker)
                    .push(" iteration-")
                    .push(iteration)
                    .push(" thread ")
                    .push(&id)
                    .endl()?;
            }
        }
    }
    Ok(())
}
