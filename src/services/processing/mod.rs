// タスク処理機能
// 擬似的な作業（固定遅延）による単一タスク処理

pub mod worker;

// 公開API
pub use worker::SimulatedWorkProcessor;
