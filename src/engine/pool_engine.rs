// WorkerPoolEngine - 依存性注入によるワーカープールエンジン
// 全ての依存関係がコンストラクタで注入される

use super::pipeline::{PoolPipeline, PoolRun};
use crate::core::{
    generate_tasks, PoolConfig, PoolResult, PoolSummary, ProgressReporter, ResultWriter, Task,
    TaskProcessor,
};
use std::sync::Arc;

/// ワーカープールエンジン
///
/// 設定・作業関数・進捗報告・出力先を受け取り、タスク生成から出力までを管理する。
/// 並列実行で共有する作業関数と進捗報告は内部でArcに包む。
pub struct WorkerPoolEngine<C, P, R, W> {
    config: C,
    processor: Arc<P>,
    reporter: Arc<R>,
    writer: W,
}

impl<C, P, R, W> WorkerPoolEngine<C, P, R, W>
where
    C: PoolConfig,
    P: TaskProcessor + 'static,
    R: ProgressReporter + 'static,
    W: ResultWriter,
{
    /// 新しいエンジンを作成（コンストラクタインジェクション）
    pub fn new(config: C, processor: P, reporter: R, writer: W) -> Self {
        Self {
            config,
            processor: Arc::new(processor),
            reporter: Arc::new(reporter),
            writer,
        }
    }

    /// 設定どおりのタスクを生成・処理し、結果を出力
    ///
    /// 出力先の作成失敗は致命的エラーとして返す。行単位の書き込み失敗は
    /// 進捗報告に通知したうえでサマリーの `write_errors` に計上する。
    pub async fn run(&self) -> PoolResult<PoolSummary> {
        let tasks = generate_tasks(self.config.task_count());
        let total_tasks = tasks.len();

        let run = self.process_tasks(tasks).await?;
        let report = self.writer.write_results(run.results.results()).await?;

        for failure in &report.failures {
            let context = format!("output line {}", failure.line_index + 1);
            self.reporter.report_error(&context, &failure.error).await;
        }

        Ok(PoolSummary {
            total_tasks,
            processed_tasks: run.processed_tasks(),
            worker_count: run.worker_reports.len(),
            lines_written: report.lines_written,
            write_errors: report.error_count(),
            collection_mode: self.config.collection_mode(),
            total_processing_time_ms: run.elapsed.as_millis() as u64,
        })
    }

    /// 指定されたタスクを処理（出力なし）
    pub async fn process_tasks(&self, tasks: Vec<Task>) -> PoolResult<PoolRun> {
        let pipeline = PoolPipeline::new(Arc::clone(&self.processor));
        pipeline
            .execute(tasks, &self.config, Arc::clone(&self.reporter))
            .await
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 出力先への参照を取得
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
