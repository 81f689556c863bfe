//! analyzer モジュール
//!
//! 形態素解析器（ふりがな付与）の抽象と、vibrato-rkyv による実装を提供する。

pub mod vibrato_analyzer;

use crate::errors::AnalyzerError;

/// 1 行のテキストをふりがな付きマークアップに変換する解析器
///
/// 出力は [`furigana::parse`](crate::furigana::parse) が読める
/// `<ruby>` 形式のマークアップであること。
/// 解析器が使えない場合は [`AnalyzerError`] を返し、呼び出し側はその行を
/// 「解析器パイプラインでは変換できない」ものとして扱う。
pub trait Analyzer: Send + Sync {
  /// `text` を解析し、ルビ付きマークアップを返す
  fn annotate(&self, text: &str) -> Result<String, AnalyzerError>;
}

/// 再エクスポート
pub use vibrato_analyzer::VibratoAnalyzer;
