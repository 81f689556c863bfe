//! mora モジュール
pub mod segmenter;

/// 再エクスポート
pub use segmenter::segment;
