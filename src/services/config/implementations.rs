// 設定管理の具象実装

use crate::core::{CollectionMode, PoolConfig, PoolError, PoolResult};
use std::time::Duration;

/// 既定のタスク数
pub const DEFAULT_TASK_COUNT: usize = 10;
/// 既定のワーカー数
pub const DEFAULT_WORKER_COUNT: usize = 4;
/// 既定の擬似処理時間
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(500);
/// 既定の結果チャンネルバッファ
pub const DEFAULT_RESULT_BUFFER_SIZE: usize = 16;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPoolConfig {
    task_count: usize,
    worker_count: usize,
    // None の場合はタスク数に合わせる
    queue_capacity: Option<usize>,
    result_buffer_size: usize,
    work_delay: Duration,
    collection_mode: CollectionMode,
}

impl DefaultPoolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = Some(queue_capacity);
        self
    }

    pub fn with_result_buffer_size(mut self, result_buffer_size: usize) -> Self {
        self.result_buffer_size = result_buffer_size;
        self
    }

    pub fn with_work_delay(mut self, work_delay: Duration) -> Self {
        self.work_delay = work_delay;
        self
    }

    pub fn with_collection_mode(mut self, collection_mode: CollectionMode) -> Self {
        self.collection_mode = collection_mode;
        self
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self {
            task_count: DEFAULT_TASK_COUNT,
            worker_count: DEFAULT_WORKER_COUNT,
            queue_capacity: None,
            result_buffer_size: DEFAULT_RESULT_BUFFER_SIZE,
            work_delay: DEFAULT_WORK_DELAY,
            collection_mode: CollectionMode::Channel,
        }
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn task_count(&self) -> usize {
        self.task_count
    }

    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(self.task_count.max(1))
    }

    fn result_buffer_size(&self) -> usize {
        self.result_buffer_size
    }

    fn work_delay(&self) -> Duration {
        self.work_delay
    }

    fn collection_mode(&self) -> CollectionMode {
        self.collection_mode
    }
}

/// 設定値の検証
///
/// キューは全タスクを事前投入するため、容量はタスク数以上でなければならない。
pub fn validate_config<C: PoolConfig + ?Sized>(config: &C) -> PoolResult<()> {
    if config.worker_count() == 0 {
        return Err(PoolError::configuration("worker count must be at least 1"));
    }

    if config.result_buffer_size() == 0 {
        return Err(PoolError::configuration(
            "result buffer size must be at least 1",
        ));
    }

    if config.queue_capacity() == 0 {
        return Err(PoolError::configuration(
            "task queue capacity must be at least 1",
        ));
    }

    if config.queue_capacity() < config.task_count() {
        return Err(PoolError::queue_capacity(
            config.task_count(),
            config.queue_capacity(),
        ));
    }

    Ok(())
}
