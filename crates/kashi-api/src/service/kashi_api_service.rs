//! Lyrics Conversion Service

use std::time::Instant;

use kashi::config::KashiConfig;
use kashi::mora::segment;
use kashi::{KashiService, Pipeline};

use crate::config::MAX_TEXT_LENGTH;
use crate::errors::{ApiError, Result};
use crate::models::{ConvertRequest, ConvertResponse, MorasRequest, MorasResponse};

/// Common interface for the conversion service
///
/// This trait allows swapping production implementation (`KashiApiServiceFull`) with
/// test stubs/mocks.
pub trait KashiApiService: Send + Sync {
  /// Converts multi-line lyrics
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, line too long)
  /// - Analyzer unavailable (pipeline `analyzer`)
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse>;

  /// Splits a kana reading into moras
  ///
  /// Needs no dictionary, so every implementation shares this one.
  /// The reading is segmented as submitted, so the moras' `kana` concatenate
  /// back to `request.kana`.
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded)
  fn moras(&self, request: MorasRequest) -> Result<MorasResponse> {
    validate_text(&request.kana)?;
    Ok(MorasResponse {
      moras: segment(&request.kana),
    })
  }
}

/// Checks the request text: not blank, at most `MAX_TEXT_LENGTH` bytes
///
/// # Errors
/// `invalid_input` or `text_too_long`
pub fn validate_text(text: &str) -> Result<()> {
  if text.trim().is_empty() {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  let text_bytes = text.len();
  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }

  Ok(())
}

/// Lyrics Conversion Service backed by [`KashiService`]
pub struct KashiApiServiceFull {
  inner: KashiService,
}

impl KashiApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Library configuration (dictionary preset, pipeline)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid, or if the dictionary
  /// fails to load with pipeline `analyzer`
  pub fn new(config: &KashiConfig) -> Result<Self> {
    Ok(Self::from_service(KashiService::init(config)?))
  }

  /// Wraps an already built service
  #[must_use]
  pub fn from_service(inner: KashiService) -> Self {
    Self { inner }
  }

  /// Pipeline used when a request does not name one
  #[must_use]
  pub fn default_pipeline(&self) -> Pipeline {
    self.inner.default_pipeline()
  }
}

impl KashiApiService for KashiApiServiceFull {
  fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse> {
    validate_text(&request.text)?;

    // Start measuring processing time
    let start = Instant::now();

    let pipeline = request.pipeline.unwrap_or_else(|| self.inner.default_pipeline());
    let conversion = self.inner.convert_text_with(&request.text, pipeline)?;

    // End measuring processing time
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(ConvertResponse {
      lines: conversion.lines,
      pipeline: conversion.pipeline,
      elapsed_ms,
    })
  }
}

#[cfg(test)]
mod tests {
  use kashi::MoraCategory;

  use super::*;

  fn fallback_service() -> KashiApiServiceFull {
    KashiApiServiceFull::from_service(KashiService::fallback_only())
  }

  fn request(text: &str, pipeline: Option<Pipeline>) -> ConvertRequest {
    ConvertRequest {
      text: text.to_string(),
      pipeline,
    }
  }

  // This does not require dictionary download so can always be run
  #[test]
  fn convert_with_fallback_service() {
    let response = fallback_service().convert(request("君の夢\n\n空", None)).unwrap();
    assert_eq!(response.pipeline, Pipeline::Fallback);
    assert_eq!(response.lines.len(), 2);
    assert_eq!(response.lines[0].romaji, "ki mi no yu me");
  }

  #[test]
  fn convert_rejects_empty_text() {
    let err = fallback_service().convert(request("  \n ", None)).unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[test]
  fn convert_rejects_too_long_text() {
    let err = fallback_service().convert(request(&"a".repeat(MAX_TEXT_LENGTH + 1), None)).unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn convert_with_analyzer_pipeline_needs_analyzer() {
    let err = fallback_service().convert(request("夢", Some(Pipeline::Analyzer))).unwrap_err();
    assert_eq!(err.code(), "analyzer_unavailable");
  }

  #[test]
  fn moras_default_implementation() {
    let response = fallback_service()
      .moras(MorasRequest {
        kana: "っきゃ".to_string(),
      })
      .unwrap();
    assert_eq!(response.moras.len(), 2);
    assert_eq!(response.moras[0].romaji, "k");
    assert_eq!(response.moras[1].category, MoraCategory::Palatalized);
  }

  #[test]
  fn moras_keep_surrounding_whitespace() {
    let kana = " らーめん ";
    let response = fallback_service()
      .moras(MorasRequest {
        kana: kana.to_string(),
      })
      .unwrap();
    let joined: String = response.moras.iter().map(|m| m.kana.as_str()).collect();
    assert_eq!(joined, kana);
    assert_eq!(response.moras[0].kana, " ");
  }

  #[test]
  fn new_with_fallback_config_needs_no_dictionary() {
    let mut config = KashiConfig::default();
    config.conversion.pipeline = Pipeline::Fallback;
    let service = KashiApiServiceFull::new(&config).unwrap();
    assert_eq!(service.default_pipeline(), Pipeline::Fallback);
  }

  // Requires dictionary download, so runs only with the feature enabled
  #[cfg(feature = "with_dict_tests")]
  #[test]
  fn convert_with_analyzer_pipeline() {
    let mut config = KashiConfig::default();
    config.conversion.pipeline = Pipeline::Analyzer;
    let service = KashiApiServiceFull::new(&config).expect("dictionary load failed");

    let response = service.convert(request("君の名は", None)).unwrap();
    assert_eq!(response.pipeline, Pipeline::Analyzer);
    assert!(response.lines[0].hiragana.starts_with("きみ"));
    assert!(!response.lines[0].words.is_empty());
  }
}
