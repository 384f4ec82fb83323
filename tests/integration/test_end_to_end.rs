// エンドツーエンド統合テスト
use crate::fixtures::{
    expected_ids, fast_config, instant_processor, read_output, sorted_task_ids,
    CountingProcessor, ObservingWriter,
};
use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use task_pool::core::{CollectionMode, PoolConfig};
use task_pool::services::{
    DefaultPoolConfig, MemoryResultWriter, NoOpProgressReporter, TextFileResultWriter,
};
use task_pool::{TaskResult, WorkerPoolEngine};
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_default_run_writes_ten_distinct_lines() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output_rust.txt");
    let config = fast_config();

    let engine = WorkerPoolEngine::new(
        config,
        instant_processor(),
        NoOpProgressReporter::new(),
        TextFileResultWriter::new(&output),
    );
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.total_tasks, 10);
    assert_eq!(summary.lines_written, 10);

    let results = read_output(&output);
    assert_eq!(results.len(), 10);
    assert_eq!(sorted_task_ids(&results), expected_ids(10));
    assert!(results.iter().all(|r| r.worker_id < 4));

    // 1行1タスク、末尾は改行で終わる
    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.ends_with('\n'));
    assert!(content
        .lines()
        .all(|line| line.starts_with("Worker ") && line.contains(" processed task ")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_every_task_processed_exactly_once_across_shapes() {
    for mode in [CollectionMode::Channel, CollectionMode::Locked] {
        for task_count in [0usize, 1, 3, 10, 37] {
            for worker_count in [1usize, 2, 4, 9] {
                let config = fast_config()
                    .with_task_count(task_count)
                    .with_worker_count(worker_count)
                    .with_collection_mode(mode);
                let writer = MemoryResultWriter::new();

                let engine = WorkerPoolEngine::new(
                    config,
                    instant_processor(),
                    NoOpProgressReporter::new(),
                    writer.clone(),
                );
                let summary = engine.run().await.unwrap();

                let results: Vec<TaskResult> = writer
                    .lines()
                    .iter()
                    .map(|line| line.parse().unwrap())
                    .collect();
                assert_eq!(
                    sorted_task_ids(&results),
                    expected_ids(task_count),
                    "mode={mode} tasks={task_count} workers={worker_count}"
                );
                assert_eq!(summary.processed_tasks, task_count);
                assert_eq!(summary.worker_count, worker_count);
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_stress_many_workers_no_loss_no_duplicates() {
    for mode in [CollectionMode::Channel, CollectionMode::Locked] {
        let config = fast_config()
            .with_task_count(2000)
            .with_worker_count(32)
            .with_result_buffer_size(4)
            .with_collection_mode(mode);
        let writer = MemoryResultWriter::new();

        let engine = WorkerPoolEngine::new(
            config,
            instant_processor(),
            NoOpProgressReporter::new(),
            writer.clone(),
        );
        engine.run().await.unwrap();

        let lines = writer.lines();
        let unique: HashSet<&String> = lines.iter().collect();
        assert_eq!(lines.len(), 2000);
        assert_eq!(unique.len(), 2000);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_output_begins_only_after_all_workers_finish() {
    for mode in [CollectionMode::Channel, CollectionMode::Locked] {
        let processor = CountingProcessor::new(Duration::from_millis(10));
        let writer = ObservingWriter::new(Arc::clone(&processor.finished));
        let config = DefaultPoolConfig::new()
            .with_task_count(12)
            .with_worker_count(4)
            .with_collection_mode(mode);

        let engine = WorkerPoolEngine::new(
            config,
            processor.clone(),
            NoOpProgressReporter::new(),
            writer.clone(),
        );
        engine.run().await.unwrap();

        assert_eq!(writer.observed_at_write.load(Ordering::SeqCst), 12);
        assert_eq!(writer.results_at_write.load(Ordering::SeqCst), 12);
        assert_eq!(processor.finished(), 12);
    }
}

#[tokio::test]
async fn test_zero_tasks_creates_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("empty.txt");
    let config = fast_config().with_task_count(0);

    let engine = WorkerPoolEngine::new(
        config.clone(),
        instant_processor(),
        NoOpProgressReporter::new(),
        TextFileResultWriter::new(&output),
    );
    let summary = engine.run().await.unwrap();

    assert_eq!(config.queue_capacity(), 1);
    assert_eq!(summary.lines_written, 0);
    assert!(output.exists());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[tokio::test]
async fn test_existing_output_is_truncated() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output_rust.txt");
    std::fs::write(&output, "stale line 1\nstale line 2\nstale line 3\n".repeat(10)).unwrap();

    let engine = WorkerPoolEngine::new(
        fast_config().with_task_count(2),
        instant_processor(),
        NoOpProgressReporter::new(),
        TextFileResultWriter::new(&output),
    );
    engine.run().await.unwrap();

    let results = read_output(&output);
    assert_eq!(sorted_task_ids(&results), vec![1, 2]);
}
