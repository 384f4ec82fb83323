// 統合テスト用の共通ヘルパー

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use task_pool::core::{
    PoolResult, ResultWriter, Task, TaskProcessor, TaskResult, WorkerId, WriteReport,
};
use task_pool::services::{DefaultPoolConfig, SimulatedWorkProcessor};

/// 遅延なしの設定
pub fn fast_config() -> DefaultPoolConfig {
    DefaultPoolConfig::new().with_work_delay(Duration::ZERO)
}

/// 遅延なしの作業関数
pub fn instant_processor() -> SimulatedWorkProcessor {
    SimulatedWorkProcessor::new(Duration::ZERO)
}

/// 出力ファイルを結果行として読み込む
pub fn read_output(path: &Path) -> Vec<TaskResult> {
    let content = std::fs::read_to_string(path).unwrap();
    content
        .lines()
        .map(|line| line.parse::<TaskResult>().unwrap())
        .collect()
}

/// 順序に依存しない比較用のソート済みタスクID
pub fn sorted_task_ids(results: &[TaskResult]) -> Vec<u64> {
    let mut ids: Vec<u64> = results.iter().map(|r| r.task_id).collect();
    ids.sort_unstable();
    ids
}

pub fn expected_ids(count: usize) -> Vec<u64> {
    (1..=count as u64).collect()
}

/// 処理完了数を数える作業関数
#[derive(Debug, Clone, Default)]
pub struct CountingProcessor {
    pub delay: Duration,
    pub finished: Arc<AtomicUsize>,
}

impl CountingProcessor {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            finished: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskProcessor for CountingProcessor {
    async fn process(&self, worker_id: WorkerId, task: Task) -> TaskResult {
        tokio::time::sleep(self.delay).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        TaskResult::new(worker_id, task.id())
    }
}

/// 書き込み開始時点の完了数を記録するライター
#[derive(Debug, Clone)]
pub struct ObservingWriter {
    pub finished: Arc<AtomicUsize>,
    pub observed_at_write: Arc<AtomicUsize>,
    pub results_at_write: Arc<AtomicUsize>,
}

impl ObservingWriter {
    pub fn new(finished: Arc<AtomicUsize>) -> Self {
        Self {
            finished,
            observed_at_write: Arc::new(AtomicUsize::new(usize::MAX)),
            results_at_write: Arc::new(AtomicUsize::new(usize::MAX)),
        }
    }
}

#[async_trait]
impl ResultWriter for ObservingWriter {
    async fn write_results(&self, results: &[TaskResult]) -> PoolResult<WriteReport> {
        self.observed_at_write
            .store(self.finished.load(Ordering::SeqCst), Ordering::SeqCst);
        self.results_at_write.store(results.len(), Ordering::SeqCst);

        Ok(WriteReport {
            lines_written: results.len(),
            failures: Vec::new(),
        })
    }
}
