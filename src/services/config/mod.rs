// 設定管理機能
// 既定値、ビルダー、検証

pub mod implementations;

// 公開API
pub use implementations::{
    validate_config, DefaultPoolConfig, DEFAULT_RESULT_BUFFER_SIZE, DEFAULT_TASK_COUNT,
    DEFAULT_WORKER_COUNT, DEFAULT_WORK_DELAY,
};
