//! fallback モジュール
//!
//! 形態素解析器を使わずに、静的な漢字辞書とかな表だけで変換する簡易パイプライン
pub mod transliterator;

/// 再エクスポート
pub use transliterator::{Transliteration, kanji_to_kana, romanize, transliterate};
