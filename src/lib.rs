pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{PoolError, PoolResult, PoolSummary, Task, TaskResult};
pub use crate::engine::WorkerPoolEngine;
