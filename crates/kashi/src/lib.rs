//! kashi 歌詞のふりがな・ローマ字変換ライブラリー
//!
//! 日本語の歌詞を行ごとに変換し、原文・ひらがな・ローマ字（ヘボン式）を返す。
//!
//! - 解析器パイプライン: 字句置換 → vibrato-rkyv によるふりがな付与 → マークアップ解析 → モーラ分割
//! - フォールバック: 静的な漢字辞書（最長一致）とかな表だけで変換

/// 解析器モジュール - Analyzer トレイトと vibrato-rkyv による実装
pub mod analyzer;

/// 設定モジュール - KashiConfig, Pipeline 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - KashiError, KashiResult 等のエラー型を定義
pub mod errors;

/// フォールバックモジュール - 静的テーブルによる変換
pub mod fallback;

/// ふりがなモジュール - ルビ付きマークアップの書き出しと解析
pub mod furigana;

/// かなモジュール - 文字種判定、かな→ローマ字表、漢字辞書、五十音表
pub mod kana;

/// データモデルモジュール - Mora, Word, Line, LyricLine 等のデータ構造を定義
pub mod models;

/// モーラモジュール - かな読みのモーラ分割とローマ字化
pub mod mora;

/// 字句置換モジュール - 解析器が誤読しやすい語の事前置換
pub mod overrides;

/// サービスモジュール - KashiService 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use config::{KashiConfig, Pipeline};
pub use errors::{KashiError, KashiResult};
pub use models::{LyricLine, Mora, MoraCategory, Word};
pub use service::{Conversion, KashiService};
