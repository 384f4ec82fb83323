// 結果出力の具象実装

use crate::core::{LineWriteFailure, PoolError, PoolResult, ResultWriter, TaskResult, WriteReport};
use async_trait::async_trait;
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// 既定の出力ファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "output_rust.txt";

/// 結果を1行ずつ書き込む
///
/// 1行ごとにフラッシュして、その行の書き込み結果を確定させてから次へ進む。
/// 失敗した行はログに記録し、`WriteReport::failures` に残す。
pub async fn write_lines<W>(writer: &mut W, path: &Path, results: &[TaskResult]) -> WriteReport
where
    W: AsyncWrite + Unpin + Send,
{
    let mut report = WriteReport::default();

    for (line_index, result) in results.iter().enumerate() {
        let line = result.line();
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(&line);
        buf.push('\n');

        // tokio::fs::File は書き込みエラーを次の操作で返すため、行ごとにフラッシュする
        let written = match writer.write_all(buf.as_bytes()).await {
            Ok(()) => writer.flush().await,
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => report.lines_written += 1,
            Err(e) => {
                let err = PoolError::output_write(path, e);
                error!("line {}: {err}", line_index + 1);
                report.failures.push(LineWriteFailure {
                    line_index,
                    line,
                    error: err.to_string(),
                });
            }
        }
    }

    report
}

/// 改行区切りのテキストファイルへ出力する実装
#[derive(Debug, Clone)]
pub struct TextFileResultWriter {
    path: PathBuf,
}

impl Default for TextFileResultWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl TextFileResultWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultWriter for TextFileResultWriter {
    async fn write_results(&self, results: &[TaskResult]) -> PoolResult<WriteReport> {
        // 親ディレクトリは作成しない。作成できなければ致命的エラー
        let mut file = File::create(&self.path)
            .await
            .map_err(|e| PoolError::output_create(&self.path, e))?;

        let report = write_lines(&mut file, &self.path, results).await;
        debug!(
            "wrote {} line(s) to {} ({} failure(s))",
            report.lines_written,
            self.path.display(),
            report.error_count()
        );

        Ok(report)
    }
}

/// メモリ内に保持する実装（テスト用および組み込み用）
#[derive(Debug, Clone, Default)]
pub struct MemoryResultWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込まれた行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

#[async_trait]
impl ResultWriter for MemoryResultWriter {
    async fn write_results(&self, results: &[TaskResult]) -> PoolResult<WriteReport> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| PoolError::channel("memory writer lock poisoned"))?;
        lines.clear();
        lines.extend(results.iter().map(TaskResult::line));

        Ok(WriteReport {
            lines_written: results.len(),
            failures: Vec::new(),
        })
    }
}
