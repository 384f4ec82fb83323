// TaskQueue - 容量固定・事前投入・クローズ済みのタスクキュー

use crate::core::{PoolError, PoolResult, Task};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Mutex;

/// キューへの投入側
///
/// `close` は `self` を消費するため、クローズ後の投入は型レベルで不可能。
#[derive(Debug)]
pub struct TaskSender {
    tx: mpsc::Sender<Task>,
}

impl TaskSender {
    /// タスクを投入。キューが満杯の場合はタスクをそのまま返す
    pub fn push(&self, task: Task) -> Result<(), Task> {
        match self.tx.try_send(task) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(task)) | Err(TrySendError::Closed(task)) => Err(task),
        }
    }

    /// キューをクローズ。バッファ済みのタスクは引き続き取り出せる
    pub fn close(self) {
        drop(self.tx);
    }
}

/// 複数ワーカーで共有する取り出し側
///
/// 各タスクはちょうど1つのワーカーにだけ配信される。
#[derive(Debug, Clone)]
pub struct TaskQueue {
    rx: Arc<Mutex<mpsc::Receiver<Task>>>,
}

impl TaskQueue {
    /// 空の有界キューを作成
    pub fn bounded(capacity: usize) -> PoolResult<(TaskSender, TaskQueue)> {
        if capacity == 0 {
            return Err(PoolError::configuration(
                "task queue capacity must be at least 1",
            ));
        }

        let (tx, rx) = mpsc::channel(capacity);
        Ok((
            TaskSender { tx },
            TaskQueue {
                rx: Arc::new(Mutex::new(rx)),
            },
        ))
    }

    /// 全タスクを投入してクローズしたキューを作成
    pub fn prefilled(tasks: Vec<Task>, capacity: usize) -> PoolResult<TaskQueue> {
        if tasks.len() > capacity {
            return Err(PoolError::queue_capacity(tasks.len(), capacity));
        }

        let required = tasks.len();
        let (sender, queue) = Self::bounded(capacity)?;
        for task in tasks {
            sender
                .push(task)
                .map_err(|_| PoolError::queue_capacity(required, capacity))?;
        }
        sender.close();

        Ok(queue)
    }

    /// 次のタスクを取得
    ///
    /// クローズ済みかつ空の場合は `None`（枯渇）を返す。クローズ前に空の場合のみ待機する。
    pub async fn next_task(&self) -> Option<Task> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }
}
