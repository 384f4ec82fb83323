// Accumulator - 処理結果の集約

use crate::core::{PoolError, PoolResult, TaskId, TaskResult};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 処理結果の順序付きシーケンス
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsAccumulator {
    results: Vec<TaskResult>,
}

impl ResultsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    /// 末尾に追加し、追加後の件数を返す
    pub fn append(&mut self, result: TaskResult) -> usize {
        self.results.push(result);
        self.results.len()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    /// 追加順の出力行
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(TaskResult::line).collect()
    }

    /// 昇順ソート済みのタスクID一覧（順序に依存しない比較用）
    pub fn sorted_task_ids(&self) -> Vec<TaskId> {
        let mut ids: Vec<TaskId> = self.results.iter().map(|r| r.task_id).collect();
        ids.sort_unstable();
        ids
    }
}

/// Mutexで保護された共有アキュムレータ
///
/// 各ワーカーはクローンしたハンドルで追記する。読み出しは
/// [`LockedAccumulator::into_results`] のみで、全ハンドルが破棄された後
/// （＝全ワーカー終了後）にしか成功しない。
#[derive(Debug, Clone, Default)]
pub struct LockedAccumulator {
    inner: Arc<Mutex<ResultsAccumulator>>,
}

impl LockedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ResultsAccumulator::with_capacity(capacity))),
        }
    }

    /// ロックを取得して追記。他の追記とは排他的に実行される
    pub async fn append(&self, result: TaskResult) -> usize {
        let mut guard = self.inner.lock().await;
        guard.append(result)
    }

    /// 唯一のハンドルであれば中身を取り出す
    pub fn into_results(self) -> PoolResult<ResultsAccumulator> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| PoolError::accumulator_in_use(Arc::strong_count(&inner) - 1))
    }
}
