// 結果の集約と出力
// アキュムレータ、結果コレクター、出力ファイルへの書き込み

pub mod accumulator;
pub mod collector;
pub mod implementations;

// 公開API
pub use accumulator::{LockedAccumulator, ResultsAccumulator};
pub use collector::spawn_result_collector;
pub use implementations::{
    write_lines, MemoryResultWriter, TextFileResultWriter, DEFAULT_OUTPUT_FILE,
};
