// エンジン層 - 並列実行とオーケストレーション
// タスクキュー、ワーカー、ジョインバリアを組み合わせて高レベルな処理を提供

pub mod barrier;
mod pipeline;
pub mod pool_engine;
pub mod queue;
pub mod worker;

// 公開API
pub use barrier::JoinBarrier;
pub use pipeline::{PoolPipeline, PoolRun};
pub use pool_engine::WorkerPoolEngine;
pub use queue::{TaskQueue, TaskSender};
pub use worker::{spawn_worker, spawn_workers, ResultSink};
