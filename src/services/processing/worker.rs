// 擬似処理 - 固定遅延による単一タスク処理

use crate::core::{PoolConfig, Task, TaskProcessor, TaskResult, WorkerId};
use async_trait::async_trait;
use std::time::Duration;

/// 固定時間スリープしてから結果を返す処理
///
/// 実処理のレイテンシの代用。ロックを保持せずに待機する。
#[derive(Debug, Clone, Copy)]
pub struct SimulatedWorkProcessor {
    delay: Duration,
}

impl SimulatedWorkProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// 設定値の遅延で作成
    pub fn from_config<C: PoolConfig + ?Sized>(config: &C) -> Self {
        Self::new(config.work_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl TaskProcessor for SimulatedWorkProcessor {
    async fn process(&self, worker_id: WorkerId, task: Task) -> TaskResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        TaskResult::new(worker_id, task.id())
    }
}
