use crate::core::CollectionMode;
use crate::services::config::{DEFAULT_TASK_COUNT, DEFAULT_WORKER_COUNT, DEFAULT_WORK_DELAY};
use crate::services::DEFAULT_OUTPUT_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "task_pool")]
#[command(about = "Drain a closed task queue with a fixed pool of workers and write the results")]
#[command(version)]
pub struct Cli {
    /// Number of tasks enqueued before the workers start
    #[arg(short, long, default_value_t = DEFAULT_TASK_COUNT)]
    pub tasks: usize,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// Simulated processing time per task in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_WORK_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Output file for the result lines
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// How worker results are accumulated
    #[arg(short, long, value_enum, default_value_t = CollectionMode::Channel)]
    pub mode: CollectionMode,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub summary_json: bool,
}
