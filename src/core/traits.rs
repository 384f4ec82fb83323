// ワーカープールのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::PoolResult;
use super::types::{CollectionMode, Task, TaskResult, WorkerId, WriteReport};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// プールの設定を抽象化するトレイト
#[automock]
pub trait PoolConfig: Send + Sync {
    /// 起動時に投入するタスク数
    fn task_count(&self) -> usize;

    /// 固定ワーカー数
    fn worker_count(&self) -> usize;

    /// タスクキューの容量（タスク数以上である必要がある）
    fn queue_capacity(&self) -> usize;

    /// 結果チャンネルのバッファサイズ
    fn result_buffer_size(&self) -> usize;

    /// 1タスクあたりの擬似処理時間
    fn work_delay(&self) -> Duration;

    /// 結果の集約方式
    fn collection_mode(&self) -> CollectionMode;
}

impl PoolConfig for Box<dyn PoolConfig> {
    fn task_count(&self) -> usize {
        self.as_ref().task_count()
    }

    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn queue_capacity(&self) -> usize {
        self.as_ref().queue_capacity()
    }

    fn result_buffer_size(&self) -> usize {
        self.as_ref().result_buffer_size()
    }

    fn work_delay(&self) -> Duration {
        self.as_ref().work_delay()
    }

    fn collection_mode(&self) -> CollectionMode {
        self.as_ref().collection_mode()
    }
}

/// タスク1件の処理（差し替え可能な作業関数）
///
/// 処理は失敗しない前提。遅延や結果の加工はすべて実装側の責任。
#[automock]
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    async fn process(&self, worker_id: WorkerId, task: Task) -> TaskResult;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_tasks: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, context: &str, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_processed: usize, total_errors: usize);
}

/// 処理結果の出力を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// 結果を順番どおりに書き出す
    ///
    /// 出力先を作成できない場合のみ `Err` を返す。行単位の失敗は
    /// [`WriteReport`] に記録され、残りの行の書き込みは継続される。
    async fn write_results(&self, results: &[TaskResult]) -> PoolResult<WriteReport>;
}
