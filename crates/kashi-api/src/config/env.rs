//! Config loading from environment variables

use std::path::PathBuf;

use kashi::config::{DictionaryPreset, KashiConfig, Pipeline};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_PIPELINE, DEFAULT_PRESET_DICT};
use crate::errors::{ApiError, Result};

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Dictionary preset to use
  pub preset: DictionaryPreset,
  /// Pipeline used when a request does not name one
  pub pipeline: Pipeline,
  /// Optional TOML file; when set, it replaces `preset` and `pipeline`
  pub config_path: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | Variable              | Default          |
  /// |-----------------------|------------------|
  /// | `KASHI_API_BASE_URL`  | `127.0.0.1:5540` |
  /// | `KASHI_PRESET_DICT`   | `ipadic`         |
  /// | `KASHI_PIPELINE`      | `auto`           |
  /// | `KASHI_CONFIG`        | (none)           |
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an arbitrary variable source
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let bind_addr = lookup("KASHI_API_BASE_URL").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let preset = lookup("KASHI_PRESET_DICT")
      .unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string())
      .parse::<DictionaryPreset>()
      .map_err(|e| ApiError::config(e.to_string()))?;

    let pipeline = lookup("KASHI_PIPELINE")
      .unwrap_or_else(|| DEFAULT_PIPELINE.to_string())
      .parse::<Pipeline>()
      .map_err(|e| ApiError::config(e.to_string()))?;

    let config_path = lookup("KASHI_CONFIG").filter(|p| !p.trim().is_empty()).map(PathBuf::from);

    Ok(Self {
      bind_addr,
      preset,
      pipeline,
      config_path,
    })
  }

  /// Builds the library configuration.
  ///
  /// Reads `config_path` when set, otherwise uses `preset` and `pipeline`
  /// with library defaults for everything else.
  ///
  /// # Errors
  /// Returns an error if the TOML file cannot be read or parsed
  pub fn to_kashi_config(&self) -> Result<KashiConfig> {
    if let Some(path) = &self.config_path {
      return KashiConfig::from_path(path).map_err(|e| ApiError::config(e.to_string()));
    }

    let mut config = KashiConfig::default();
    config.dictionary.preset = self.preset;
    config.conversion.pipeline = self.pipeline;
    Ok(config)
  }
}
