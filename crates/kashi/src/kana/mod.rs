//! kana モジュール - かな・漢字の静的データと文字種判定

/// 五十音図
pub mod gojuon;

/// 漢字 → かな 辞書（フォールバック変換用）
pub mod kanji_dictionary;

/// 文字種判定・ひらがな正規化
pub mod script;

/// かな → ローマ字 表
pub mod table;

/// 再エクスポート
pub use gojuon::{GojuonCell, GojuonRow, gojuon_rows};
pub use script::{katakana_to_hiragana, normalize_hiragana};
