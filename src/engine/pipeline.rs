// Pipeline - キュー投入 → ワーカー起動 → バリア待機 → 結果読み出し
// メインパイプライン機能とオーケストレーション

use super::queue::TaskQueue;
use super::worker::{spawn_workers, ResultSink};
use crate::core::{
    CollectionMode, PoolConfig, PoolError, PoolResult, ProgressReporter, Task, TaskProcessor,
    WorkerReport,
};
use crate::services::config::validate_config;
use crate::services::persistence::{spawn_result_collector, LockedAccumulator, ResultsAccumulator};
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// パイプライン1回分の実行結果（出力前）
#[derive(Debug, Clone)]
pub struct PoolRun {
    pub results: ResultsAccumulator,
    pub worker_reports: Vec<WorkerReport>,
    pub elapsed: Duration,
}

impl PoolRun {
    pub fn processed_tasks(&self) -> usize {
        self.results.len()
    }
}

/// 結果の読み出し方法
enum Collection {
    Channel(tokio::task::JoinHandle<ResultsAccumulator>),
    Locked(LockedAccumulator),
}

/// ワーカープールのパイプライン
pub struct PoolPipeline<P> {
    processor: Arc<P>,
}

impl<P> PoolPipeline<P>
where
    P: TaskProcessor + 'static,
{
    pub fn new(processor: Arc<P>) -> Self {
        Self { processor }
    }

    /// タスク一覧を処理
    ///
    /// 設定はキューやチャンネルを作る前に検証する。
    /// 書き込み → バリア → 読み出しの順序を守る。結果チャンネルの送信側は
    /// バリア通過後に初めて全て閉じられ、ロック付きアキュムレータは全ワーカーの
    /// ハンドルが破棄されるまで読み出せない。
    pub async fn execute<C, R>(
        &self,
        tasks: Vec<Task>,
        config: &C,
        reporter: Arc<R>,
    ) -> PoolResult<PoolRun>
    where
        C: PoolConfig + ?Sized,
        R: ProgressReporter + 'static,
    {
        validate_config(config)?;

        let start_time = Instant::now();
        let total_tasks = tasks.len();

        // 全タスクを投入してクローズ
        let queue = TaskQueue::prefilled(tasks, config.queue_capacity())?;

        reporter.report_started(total_tasks).await;

        let (sink, collection) = match config.collection_mode() {
            CollectionMode::Channel => {
                let (result_tx, result_rx) = mpsc::channel(config.result_buffer_size());
                let collector = spawn_result_collector(result_rx, total_tasks, reporter.clone());
                (ResultSink::Channel(result_tx), Collection::Channel(collector))
            }
            CollectionMode::Locked => {
                let accumulator = LockedAccumulator::with_capacity(total_tasks);
                (
                    ResultSink::Locked(accumulator.clone()),
                    Collection::Locked(accumulator),
                )
            }
        };

        // Worker Pool起動
        let barrier = spawn_workers(
            config.worker_count(),
            &queue,
            Arc::clone(&self.processor),
            &sink,
        );
        drop(queue);
        // 手元の送信側・ハンドルを破棄し、ワーカーのものだけが残るようにする
        drop(sink);

        // ジョインバリア
        let worker_reports = barrier.wait().await?;
        debug!("Join barrier passed for {} worker(s)", worker_reports.len());

        let results = match collection {
            Collection::Channel(collector) => collector.await.map_err(PoolError::task)?,
            Collection::Locked(accumulator) => {
                let results = accumulator.into_results()?;
                reporter.report_progress(results.len(), total_tasks).await;
                results
            }
        };

        reporter.report_completed(results.len(), 0).await;

        Ok(PoolRun {
            results,
            worker_reports,
            elapsed: start_time.elapsed(),
        })
    }
}
