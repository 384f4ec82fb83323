// ワーカープール用のカスタムエラー型定義

use crate::core::types::WorkerId;
use std::path::PathBuf;
use thiserror::Error;

/// ワーカープール固有のエラー型
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("task queue capacity {capacity} is smaller than the {required} tasks to enqueue")]
    QueueCapacityError { required: usize, capacity: usize },

    #[error("channel error: {message}")]
    ChannelError { message: String },

    #[error("worker {worker_id} terminated abnormally: {source}")]
    WorkerJoinError {
        worker_id: WorkerId,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("task error: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("results accumulator is still shared by {holders} handle(s)")]
    AccumulatorInUse { holders: usize },

    #[error("error creating output file {}: {source}", path.display())]
    OutputCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing output file {}: {source}", path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PoolError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// キュー容量不足エラーの作成
    pub fn queue_capacity(required: usize, capacity: usize) -> Self {
        Self::QueueCapacityError { required, capacity }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// ワーカー異常終了エラーの作成
    pub fn worker_join(worker_id: WorkerId, source: tokio::task::JoinError) -> Self {
        Self::WorkerJoinError { worker_id, source }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    pub fn accumulator_in_use(holders: usize) -> Self {
        Self::AccumulatorInUse { holders }
    }

    /// 出力ファイル作成エラーの作成
    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputCreateError {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWriteError {
            path: path.into(),
            source,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 1行単位の書き込み失敗のみ回復可能で、それ以外はプロセス全体を中断する。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutputWriteError { .. } => true,
            Self::ConfigurationError { .. }
            | Self::QueueCapacityError { .. }
            | Self::ChannelError { .. }
            | Self::WorkerJoinError { .. }
            | Self::TaskError { .. }
            | Self::AccumulatorInUse { .. }
            | Self::OutputCreateError { .. } => false,
        }
    }
}

/// ワーカープール用のResult型エイリアス
pub type PoolResult<T> = Result<T, PoolError>;
