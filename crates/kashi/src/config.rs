//! kashi の設定（TOML）

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// 1 行あたりの最大バイト数のデフォルト値
pub const DEFAULT_MAX_LINE_BYTES: usize = 4096;

/// Conversion pipeline.
///
/// - `Analyzer`: furigana analyzer only, fails if it is unusable
/// - `Fallback`: static tables only
/// - `Auto`: analyzer; the whole batch is redone with the static tables when
///   the analyzer is unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
  /// Morphological analyzer (furigana markup)
  Analyzer,
  /// Static kanji dictionary and kana table
  Fallback,
  /// Analyzer, falling back for the whole batch
  #[default]
  Auto,
}

impl Pipeline {
  /// Name used in configuration files, environment variables and JSON
  pub fn as_str(&self) -> &'static str {
    match self {
      Pipeline::Analyzer => "analyzer",
      Pipeline::Fallback => "fallback",
      Pipeline::Auto => "auto",
    }
  }
}

impl fmt::Display for Pipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Pipeline {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "analyzer" => Ok(Pipeline::Analyzer),
      "fallback" => Ok(Pipeline::Fallback),
      "auto" => Ok(Pipeline::Auto),
      _ => Err(ConfigError::UnknownValue {
        field: "conversion.pipeline",
        value: s.to_string(),
        expected: "analyzer | fallback | auto",
      }),
    }
  }
}

/// Top-level configuration for kashi.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KashiConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [conversion] section
  #[serde(default)]
  pub conversion: ConversionConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` when omitted; `DictionaryManager` then uses the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` comes from vibrato-rkyv and has no `Deserialize`
/// implementation (orphan rule), so configuration files use this enum and it
/// is converted with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  #[default]
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "ipadic" => Ok(DictionaryPreset::Ipadic),
      "unidic-cwj" => Ok(DictionaryPreset::UnidicCwj),
      "unidic-csj" => Ok(DictionaryPreset::UnidicCsj),
      _ => Err(ConfigError::UnknownValue {
        field: "dictionary.preset",
        value: s.to_string(),
        expected: "ipadic | unidic-cwj | unidic-csj",
      }),
    }
  }
}

/// [conversion] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
  /// Pipeline used when a request does not name one
  #[serde(default)]
  pub pipeline: Pipeline,
  /// Longest accepted input line, in bytes (after trimming)
  #[serde(default = "default_max_line_bytes")]
  pub max_line_bytes: usize,
}

fn default_max_line_bytes() -> usize {
  DEFAULT_MAX_LINE_BYTES
}

impl Default for ConversionConfig {
  fn default() -> Self {
    Self {
      pipeline: Pipeline::default(),
      max_line_bytes: DEFAULT_MAX_LINE_BYTES,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string for `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl KashiConfig {
  /// Parses TOML text. Missing sections and keys take their defaults.
  pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Parse {
      reason: e.to_string(),
    })
  }

  /// Reads and parses a TOML file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_toml_str(&text)
  }
}

// ===== Accessor Methods =====

impl KashiConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified in TOML.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the default pipeline.
  pub fn pipeline(&self) -> Pipeline {
    self.conversion.pipeline
  }

  /// Returns the maximum line length in bytes.
  pub fn max_line_bytes(&self) -> usize {
    self.conversion.max_line_bytes
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `conversion.max_line_bytes` >= 1
  /// - `dictionary.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the first failing item as `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // conversion.max_line_bytes >= 1
    if self.conversion.max_line_bytes < 1 {
      return Err(ConfigError::InvalidMaxLineBytes {
        actual: self.conversion.max_line_bytes,
      });
    }

    // dictionary.cache_dir exists or can be created
    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        // If it exists, check that it is a directory
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// ===== Convert configuration types to vibrato-rkyv types =====

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
