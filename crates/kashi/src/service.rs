// crates/kashi/src/service.rs

//! KashiService: kashi クレートの統合ファサード。
//!
//! - 辞書管理 (DictionaryManager)
//! - ふりがな解析器 (Analyzer)
//! - 行単位の変換（解析器パイプライン / 静的テーブルによるフォールバック）
//!
//! HTTP API などの外部からは、この構造体だけを意識すればよい。
//!
//! # バッチ変換
//!
//! 複数行のテキストを受け取り、空行を除いた各行を rayon で並列に変換する。
//! 結果は入力順に並ぶ。解析器パイプラインはバッチ単位で全成功か全失敗のどちらかで、
//! 一部の行だけがフォールバックで変換されることはない。

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::analyzer::{Analyzer, VibratoAnalyzer};
use crate::config::{KashiConfig, Pipeline};
use crate::dictionary::DictionaryManager;
use crate::errors::{AnalyzerError, KashiError, KashiResult};
use crate::fallback;
use crate::furigana;
use crate::models::{Line, LyricLine, export_lines};
use crate::overrides::apply_overrides;

/// バッチ変換の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
  /// 変換済みの行（入力順、空行は含まない）
  pub lines: Vec<LyricLine>,
  /// 実際に使われたパイプライン（`Analyzer` か `Fallback`）
  pub pipeline: Pipeline,
}

impl Conversion {
  /// コピー／エクスポート用のテキスト
  pub fn export(&self) -> String {
    export_lines(&self.lines)
  }
}

/// kashi クレートの統合ファサード。
pub struct KashiService {
  /// リクエストでパイプラインが指定されなかったときに使うパイプライン
  default_pipeline: Pipeline,

  /// 1 行あたりの最大バイト数
  max_line_bytes: usize,

  /// ふりがな解析器（未構成なら None）
  analyzer: Option<Arc<dyn Analyzer>>,

  /// 辞書マネージャ（vibrato 解析器を使う場合のみ）
  dictionary_manager: Option<DictionaryManager>,
}

impl KashiService {
  /// 初期化（設定検証 + 辞書ロード + 解析器構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. パイプラインが `Fallback` 以外なら辞書をロードして解析器を構築
  ///
  /// # エラー
  /// - 設定が不正
  /// - パイプラインが `Analyzer` で辞書ロードに失敗した場合
  ///
  /// パイプラインが `Auto` の場合、辞書ロードの失敗は警告ログのみで、
  /// 以後の変換はすべてフォールバックで行われる。
  pub fn init(config: &KashiConfig) -> KashiResult<Self> {
    // ConfigError は #[from] で KashiError に自動変換
    config.validate()?;

    let (dictionary_manager, analyzer) = match config.pipeline() {
      Pipeline::Fallback => (None, None),
      Pipeline::Analyzer => {
        let (manager, analyzer) = load_vibrato(config)?;
        (Some(manager), Some(analyzer))
      }
      Pipeline::Auto => match load_vibrato(config) {
        Ok((manager, analyzer)) => (Some(manager), Some(analyzer)),
        Err(e) => {
          warn!(error = %e, "辞書をロードできないため、静的テーブルのみで変換します");
          (None, None)
        }
      },
    };

    info!(
      pipeline = %config.pipeline(),
      analyzer = analyzer.is_some(),
      "KashiService を初期化しました"
    );

    Ok(Self {
      default_pipeline: config.pipeline(),
      max_line_bytes: config.max_line_bytes(),
      analyzer,
      dictionary_manager,
    })
  }

  /// 任意の解析器を使うサービスを構築する（設定ファイル不要）
  pub fn with_analyzer(analyzer: Arc<dyn Analyzer>, default_pipeline: Pipeline) -> Self {
    Self {
      default_pipeline,
      max_line_bytes: crate::config::DEFAULT_MAX_LINE_BYTES,
      analyzer: Some(analyzer),
      dictionary_manager: None,
    }
  }

  /// 解析器を持たず、静的テーブルだけで変換するサービスを構築する
  pub fn fallback_only() -> Self {
    Self {
      default_pipeline: Pipeline::Fallback,
      max_line_bytes: crate::config::DEFAULT_MAX_LINE_BYTES,
      analyzer: None,
      dictionary_manager: None,
    }
  }

  /// 1 行あたりの最大バイト数を変更する
  pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
    self.max_line_bytes = max_line_bytes;
    self
  }

  /// デフォルトのパイプライン
  pub fn default_pipeline(&self) -> Pipeline {
    self.default_pipeline
  }

  /// 解析器が使えるかどうか
  pub fn has_analyzer(&self) -> bool {
    self.analyzer.is_some()
  }

  /// 辞書マネージャ（vibrato 解析器をロードした場合のみ）
  pub fn dictionary_manager(&self) -> Option<&DictionaryManager> {
    self.dictionary_manager.as_ref()
  }

  /// デフォルトのパイプラインで複数行テキストを変換する。
  pub fn convert_text(&self, text: &str) -> KashiResult<Conversion> {
    self.convert_text_with(text, self.default_pipeline)
  }

  /// 指定したパイプラインで複数行テキストを変換する。
  ///
  /// # エラー
  /// - 行が `max_line_bytes` を超える（`InvalidInput`）
  /// - `Analyzer` 指定で解析器が使えない（`Analyzer`）
  pub fn convert_text_with(&self, text: &str, pipeline: Pipeline) -> KashiResult<Conversion> {
    let lines = self.prepare_lines(text)?;

    let conversion = match pipeline {
      Pipeline::Fallback => Conversion {
        lines: convert_lines_fallback(&lines),
        pipeline: Pipeline::Fallback,
      },
      Pipeline::Analyzer => Conversion {
        lines: self.convert_lines_analyzer(&lines)?,
        pipeline: Pipeline::Analyzer,
      },
      Pipeline::Auto => match self.convert_lines_analyzer(&lines) {
        Ok(converted) => Conversion {
          lines: converted,
          pipeline: Pipeline::Analyzer,
        },
        Err(e) if e.is_analyzer_unavailable() => {
          warn!(
            error = %e,
            lines = lines.len(),
            "解析器が使えないため、バッチ全体をフォールバックで再変換します"
          );
          Conversion {
            lines: convert_lines_fallback(&lines),
            pipeline: Pipeline::Fallback,
          }
        }
        Err(e) => return Err(e),
      },
    };

    info!(
      requested = %pipeline,
      used = %conversion.pipeline,
      lines = conversion.lines.len(),
      "変換完了"
    );

    Ok(conversion)
  }

  /// 入力を行に分割し、前後の空白を除いて空行を捨てる。長すぎる行はエラー。
  fn prepare_lines<'a>(&self, text: &'a str) -> KashiResult<Vec<&'a str>> {
    let mut lines = Vec::new();
    for (index, line) in text.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      if line.len() > self.max_line_bytes {
        return Err(KashiError::InvalidInput {
          reason: format!(
            "{} 行目が長すぎます: {} バイト (上限 {} バイト)",
            index + 1,
            line.len(),
            self.max_line_bytes
          ),
        });
      }
      lines.push(line);
    }
    Ok(lines)
  }

  /// 解析器パイプラインで全行を変換する。1 行でも失敗したらバッチ全体が失敗する。
  fn convert_lines_analyzer(&self, lines: &[&str]) -> KashiResult<Vec<LyricLine>> {
    let analyzer = self.analyzer.as_deref().ok_or_else(|| AnalyzerError::Unavailable {
      reason: "解析器が構成されていません".to_string(),
    })?;

    lines.par_iter().map(|line| convert_line(analyzer, line)).collect()
  }
}

/// 解析器パイプラインで 1 行を変換する。
///
/// 字句置換 → 解析器 → マークアップ解析 → モーラ分割
pub fn convert_line(analyzer: &dyn Analyzer, line: &str) -> KashiResult<LyricLine> {
  let corrected = apply_overrides(line);
  let markup = analyzer.annotate(&corrected)?;
  let words = furigana::parse(&markup);
  debug!(line = %line, markup = %markup, words = words.len(), "解析器パイプラインで変換");
  Ok(LyricLine::from_line(line, Line::new(words)))
}

/// 静的テーブルで 1 行を変換する。失敗しない。
pub fn convert_line_fallback(line: &str) -> LyricLine {
  let result = fallback::transliterate(line);
  LyricLine::rendered(line, result.kana, result.romaji)
}

fn convert_lines_fallback(lines: &[&str]) -> Vec<LyricLine> {
  lines.par_iter().map(|line| convert_line_fallback(line)).collect()
}

/// 設定に従って辞書をロードし、vibrato 解析器を構築する
fn load_vibrato(config: &KashiConfig) -> KashiResult<(DictionaryManager, Arc<dyn Analyzer>)> {
  let manager = match config.dictionary_cache_dir() {
    Some(cache_dir) => DictionaryManager::with_preset_in(config.dictionary_preset(), cache_dir),
    None => DictionaryManager::with_preset(config.dictionary_preset())?,
  };
  let dict = manager.load()?;
  let analyzer: Arc<dyn Analyzer> = Arc::new(VibratoAnalyzer::from_shared_dictionary(dict));
  Ok((manager, analyzer))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
