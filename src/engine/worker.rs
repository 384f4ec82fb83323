// Worker - キューを枯渇するまで処理する並列ワーカー

use super::barrier::JoinBarrier;
use super::queue::TaskQueue;
use crate::core::{PoolError, PoolResult, TaskProcessor, TaskResult, WorkerId, WorkerReport};
use crate::services::persistence::LockedAccumulator;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc;

/// ワーカーが結果を渡す先
#[derive(Debug, Clone)]
pub enum ResultSink {
    /// 結果チャンネル（コレクタータスクが受信）
    Channel(mpsc::Sender<TaskResult>),
    /// ロック付き共有アキュムレータ
    Locked(LockedAccumulator),
}

impl ResultSink {
    /// 結果を1件渡す。コレクターが終了済みの場合のみ失敗する
    pub async fn deliver(&self, result: TaskResult) -> PoolResult<()> {
        match self {
            Self::Channel(tx) => tx
                .send(result)
                .await
                .map_err(|_| PoolError::channel("result collector has shut down")),
            Self::Locked(accumulator) => {
                accumulator.append(result).await;
                Ok(())
            }
        }
    }
}

/// 単一ワーカー
///
/// キューが枯渇するとループを抜け、処理件数を `WorkerReport` として返す。
pub fn spawn_worker<P>(
    worker_id: WorkerId,
    queue: TaskQueue,
    processor: Arc<P>,
    sink: ResultSink,
) -> tokio::task::JoinHandle<WorkerReport>
where
    P: TaskProcessor + 'static,
{
    tokio::spawn(async move {
        let mut tasks_processed = 0;

        while let Some(task) = queue.next_task().await {
            info!("Worker {worker_id} processing task {}", task.id());

            let result = processor.process(worker_id, task).await;

            if let Err(e) = sink.deliver(result).await {
                warn!("Worker {worker_id} stopping: {e}");
                break;
            }
            tasks_processed += 1;
        }

        debug!("Worker {worker_id} finished after {tasks_processed} task(s)");
        WorkerReport {
            worker_id,
            tasks_processed,
        }
    })
}

/// Workers: 固定数のワーカーを起動し、ジョインバリアに登録
pub fn spawn_workers<P>(
    worker_count: usize,
    queue: &TaskQueue,
    processor: Arc<P>,
    sink: &ResultSink,
) -> JoinBarrier<WorkerReport>
where
    P: TaskProcessor + 'static,
{
    let mut barrier = JoinBarrier::with_capacity(worker_count);

    for worker_id in 0..worker_count {
        let handle = spawn_worker(
            worker_id,
            queue.clone(),
            Arc::clone(&processor),
            sink.clone(),
        );
        barrier.register(worker_id, handle);
    }

    barrier
}
