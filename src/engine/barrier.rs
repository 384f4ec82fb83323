// JoinBarrier - 登録済みの全ワーカーの終了を待つ同期点

use crate::core::{PoolError, PoolResult, WorkerId};
use log::{debug, error};
use tokio::task::JoinHandle;

/// ワーカーの完了待ち合わせ
///
/// 登録1件につき完了通知1件（ジョインハンドルの戻り値）を受け取る。
/// タイムアウトやキャンセルはない。
#[derive(Debug)]
pub struct JoinBarrier<T> {
    handles: Vec<(WorkerId, JoinHandle<T>)>,
}

impl<T> Default for JoinBarrier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> JoinBarrier<T> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    /// 起動したワーカーを登録
    pub fn register(&mut self, worker_id: WorkerId, handle: JoinHandle<T>) {
        self.handles.push((worker_id, handle));
    }

    /// 登録数
    pub fn registered(&self) -> usize {
        self.handles.len()
    }

    /// 全ワーカーの終了を待機し、完了通知を登録順で返す
    ///
    /// 異常終了したワーカーがいても残りの全ワーカーを待ってから、
    /// 最初に失敗したワーカーのエラーを返す。
    pub async fn wait(self) -> PoolResult<Vec<T>> {
        let registered = self.handles.len();
        let mut completions = Vec::with_capacity(registered);
        let mut first_error = None;

        for (worker_id, handle) in self.handles {
            match handle.await {
                Ok(value) => completions.push(value),
                Err(e) => {
                    error!("Worker {worker_id} did not complete: {e}");
                    if first_error.is_none() {
                        first_error = Some(PoolError::worker_join(worker_id, e));
                    }
                }
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        debug!("All {registered} worker(s) completed");
        Ok(completions)
    }
}
