// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;
use log::{error, info};

/// logクレート経由で進捗を報告する実装
#[derive(Debug, Default, Clone)]
pub struct LogProgressReporter {
    quiet: bool,
}

impl LogProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開始・進捗・完了を抑制（エラーのみ報告）
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[async_trait]
impl ProgressReporter for LogProgressReporter {
    async fn report_started(&self, total_tasks: usize) {
        if !self.quiet {
            info!("Starting pool with {total_tasks} task(s)");
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if !self.quiet && total > 0 {
            let percentage = (completed as f64 / total as f64) * 100.0;
            info!("Progress: {completed}/{total} ({percentage:.1}%)");
        }
    }

    async fn report_error(&self, context: &str, error: &str) {
        error!("{context}: {error}");
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        if !self.quiet {
            info!("Completed! Processed: {total_processed}, Errors: {total_errors}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_tasks: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _completed: usize, _total: usize) {
        // 何もしない
    }

    async fn report_error(&self, _context: &str, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _total_processed: usize, _total_errors: usize) {
        // 何もしない
    }
}
