// エラーハンドリング統合テスト
use crate::fixtures::{fast_config, instant_processor};
use task_pool::core::PoolError;
use task_pool::services::{MemoryResultWriter, NoOpProgressReporter, TextFileResultWriter};
use task_pool::WorkerPoolEngine;
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_output_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("does_not_exist").join("out.txt");

    let engine = WorkerPoolEngine::new(
        fast_config(),
        instant_processor(),
        NoOpProgressReporter::new(),
        TextFileResultWriter::new(&output),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, PoolError::OutputCreateError { .. }));
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("does_not_exist"));
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[tokio::test]
async fn test_output_path_is_a_directory() {
    let temp_dir = TempDir::new().unwrap();

    let engine = WorkerPoolEngine::new(
        fast_config().with_task_count(1),
        instant_processor(),
        NoOpProgressReporter::new(),
        TextFileResultWriter::new(temp_dir.path()),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, PoolError::OutputCreateError { .. }));
}

#[tokio::test]
async fn test_invalid_configurations_are_rejected() {
    let cases = [
        fast_config().with_worker_count(0),
        fast_config().with_result_buffer_size(0),
        fast_config().with_queue_capacity(0),
    ];

    for config in cases {
        let writer = MemoryResultWriter::new();
        let engine = WorkerPoolEngine::new(
            config,
            instant_processor(),
            NoOpProgressReporter::new(),
            writer.clone(),
        );

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, PoolError::ConfigurationError { .. }), "{err}");
        assert!(writer.lines().is_empty());
    }
}

#[tokio::test]
async fn test_queue_smaller_than_task_count_is_rejected() {
    let engine = WorkerPoolEngine::new(
        fast_config().with_task_count(10).with_queue_capacity(4),
        instant_processor(),
        NoOpProgressReporter::new(),
        MemoryResultWriter::new(),
    );

    let err = engine.run().await.unwrap_err();
    assert!(matches!(
        err,
        PoolError::QueueCapacityError {
            required: 10,
            capacity: 4
        }
    ));
}
