//! furigana モジュール
//!
//! 解析器が出力するルビ付きマークアップの書き出し（markup）と読み取り（parser）

pub mod markup;
pub mod parser;

/// 再エクスポート
pub use parser::parse;
