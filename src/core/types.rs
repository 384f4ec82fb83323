// ワーカープールで扱うデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// タスク識別子
pub type TaskId = u64;
/// ワーカー識別子（0始まりのインデックス）
pub type WorkerId = usize;

/// 1単位の作業。識別子以外のペイロードは持たない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
}

impl Task {
    pub fn new(id: TaskId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }
}

/// 1..=count のタスク列を生成
pub fn generate_tasks(count: usize) -> Vec<Task> {
    (1..=count as TaskId).map(Task::new).collect()
}

/// ワーカーがタスクを処理した結果
///
/// 表示形式は `Worker <w> processed task <t>` で、そのまま出力ファイルの1行になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskResult {
    pub worker_id: WorkerId,
    pub task_id: TaskId,
}

impl TaskResult {
    pub fn new(worker_id: WorkerId, task_id: TaskId) -> Self {
        Self { worker_id, task_id }
    }

    /// 出力ファイルに書き込む1行（改行なし）
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worker {} processed task {}", self.worker_id, self.task_id)
    }
}

/// 結果行のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid result line: {line:?}")]
pub struct ParseResultLineError {
    pub line: String,
}

impl FromStr for TaskResult {
    type Err = ParseResultLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseResultLineError {
            line: s.to_string(),
        };

        let rest = s.trim_end().strip_prefix("Worker ").ok_or_else(invalid)?;
        let (worker, task) = rest.split_once(" processed task ").ok_or_else(invalid)?;
        let worker_id = worker.parse::<WorkerId>().map_err(|_| invalid())?;
        let task_id = task.parse::<TaskId>().map_err(|_| invalid())?;

        Ok(Self::new(worker_id, task_id))
    }
}

/// ワーカー終了時にジョインバリアへ渡す完了通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: WorkerId,
    pub tasks_processed: usize,
}

/// 結果の集約方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollectionMode {
    /// 結果チャンネル経由で単一のコレクタータスクに集約
    #[default]
    Channel,
    /// Mutexで保護された共有アキュムレータに各ワーカーが追記
    Locked,
}

impl fmt::Display for CollectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel => f.write_str("channel"),
            Self::Locked => f.write_str("locked"),
        }
    }
}

/// 出力ファイルの1行の書き込み失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWriteFailure {
    /// 0始まりの行番号
    pub line_index: usize,
    pub line: String,
    pub error: String,
}

/// 出力書き込みの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub lines_written: usize,
    pub failures: Vec<LineWriteFailure>,
}

impl WriteReport {
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub total_tasks: usize,
    pub processed_tasks: usize,
    pub worker_count: usize,
    pub lines_written: usize,
    pub write_errors: usize,
    pub collection_mode: CollectionMode,
    pub total_processing_time_ms: u64,
}
