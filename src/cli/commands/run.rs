use crate::cli::Cli;
use crate::core::{PoolSummary, ProgressReporter};
use crate::engine::WorkerPoolEngine;
use crate::services::{
    DefaultPoolConfig, LogProgressReporter, SimulatedWorkProcessor, TextFileResultWriter,
};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Duration;

/// Build the pool configuration from the command line
pub fn build_config(cli: &Cli) -> DefaultPoolConfig {
    DefaultPoolConfig::new()
        .with_task_count(cli.tasks)
        .with_worker_count(cli.workers)
        .with_work_delay(Duration::from_millis(cli.delay_ms))
        .with_collection_mode(cli.mode)
}

/// Run the worker pool and write the result file
pub async fn execute_run(cli: &Cli) -> Result<PoolSummary> {
    let config = build_config(cli);
    let reporter = if cli.quiet {
        LogProgressReporter::quiet()
    } else {
        LogProgressReporter::new()
    };

    execute_run_with(config, reporter, cli).await
}

async fn execute_run_with<R>(config: DefaultPoolConfig, reporter: R, cli: &Cli) -> Result<PoolSummary>
where
    R: ProgressReporter + 'static,
{
    let processor = SimulatedWorkProcessor::from_config(&config);
    let writer = TextFileResultWriter::new(&cli.output);
    let engine = WorkerPoolEngine::new(config, processor, reporter, writer);

    let summary = engine
        .run()
        .await
        .with_context(|| format!("worker pool run failed ({})", cli.output.display()))?;

    if summary.write_errors > 0 {
        warn!(
            "{} line(s) could not be written to {}",
            summary.write_errors,
            cli.output.display()
        );
    }

    if !cli.quiet {
        info!(
            "Wrote {} result line(s) to {} in {} ms",
            summary.lines_written,
            cli.output.display(),
            summary.total_processing_time_ms
        );
    }

    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(summary)
}
