//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 設定ファイル（KashiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// 設定ファイルを読み込めない
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// TOML として解釈できない
  #[error("設定ファイルの解析に失敗しました: {reason}")]
  Parse {
    /// toml クレートが返したエラーメッセージ
    reason: String,
  },

  /// conversion.max_line_bytes < 1
  #[error("conversion.max_line_bytes は 1 以上である必要があります: actual={actual}")]
  InvalidMaxLineBytes {
    /// 実際に指定された値
    actual: usize,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 未知の値（パイプライン名、辞書プリセット名など）
  #[error("{field} に不明な値が指定されました: {value} (有効な値: {expected})")]
  UnknownValue {
    /// 対象フィールド
    field: &'static str,
    /// 指定された値
    value: String,
    /// 有効な値の一覧
    expected: &'static str,
  },
}

/// 辞書関連のエラー
/// Vibrato では mecab, ipadic, unidic 等の辞書を使用可能
/// これらのエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 形態素解析器（ふりがな付与）関連のエラー
///
/// いずれのバリアントも「この行に対して解析器パイプラインは使えない」ことを意味する。
/// バッチ変換中に発生した場合、バッチ全体を中断する。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 解析器が利用できない（未構成、初期化失敗など）
  #[error("形態素解析器が利用できません: {reason}")]
  Unavailable {
    /// 利用できない理由
    reason: String,
  },

  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `KashiResult<T>` = `Result<T, KashiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum KashiError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 解析器関連エラー
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// 入力テキストが不正
  #[error("入力テキストが不正です: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },
}

impl KashiError {
  /// 解析器パイプラインが使えないことを示すエラーかどうか
  ///
  /// `Pipeline::Auto` はこの判定が真のときだけバッチ全体をフォールバックで再実行する。
  pub fn is_analyzer_unavailable(&self) -> bool {
    matches!(self, KashiError::Analyzer(_))
  }
}

/// kashi クレートの標準 Result 型エイリアス
pub type KashiResult<T> = Result<T, KashiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyzer_error_is_flagged_as_unavailable() {
    let err = KashiError::from(AnalyzerError::Unavailable { reason: "not loaded".to_string() });
    assert!(err.is_analyzer_unavailable());
    assert!(err.to_string().contains("not loaded"));
  }

  #[test]
  fn config_error_is_not_analyzer_unavailable() {
    let err = KashiError::from(ConfigError::InvalidMaxLineBytes { actual: 0 });
    assert!(!err.is_analyzer_unavailable());
  }

  #[test]
  fn dictionary_error_converts_into_analyzer_error() {
    let err = AnalyzerError::from(DictionaryError::CacheDirNotFound);
    assert!(matches!(err, AnalyzerError::Dictionary(DictionaryError::CacheDirNotFound)));
  }
}
