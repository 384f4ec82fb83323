// 進捗監視機能
// 処理開始、進捗、エラー通知、完了通知

pub mod implementations;

// 公開API
pub use implementations::{LogProgressReporter, NoOpProgressReporter};
