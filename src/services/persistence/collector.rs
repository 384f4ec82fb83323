// Collector - 結果チャンネルからの収集

use super::accumulator::ResultsAccumulator;
use crate::core::{ProgressReporter, TaskResult};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collector: 全送信側がクローズされるまで結果を受信して集約
///
/// アキュムレータはこのタスクが単独で所有するため、ロックは不要。
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<TaskResult>,
    total_tasks: usize,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<ResultsAccumulator>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut accumulator = ResultsAccumulator::with_capacity(total_tasks);

        while let Some(result) = result_rx.recv().await {
            let completed = accumulator.append(result);
            reporter.report_progress(completed, total_tasks).await;
        }

        accumulator
    })
}
