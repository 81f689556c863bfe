//! Analyzer backed by vibrato-rkyv

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::Analyzer;
use crate::errors::AnalyzerError;
use crate::furigana::markup;
use crate::kana::script;

/// Position of the katakana reading in a token's comma-separated feature.
///
/// Same index for IPADIC (`名詞,一般,*,*,*,*,東京,トウキョウ,トーキョー`) and
/// UniDic (`接尾辞,名詞的,一般,*,*,*,寺,テラ,寺,テラ,...`).
pub const IDX_READING: usize = 7;

/// Furigana analyzer using Vibrato-rkyv
///
/// - Holds only the tokenizer (dictionary reference)
/// - `Clone + Send + Sync`, one worker is created per call
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use kashi::dictionary::DictionaryManager;
  /// # use kashi::analyzer::{Analyzer, VibratoAnalyzer};
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let analyzer = VibratoAnalyzer::from_shared_dictionary(manager.load().unwrap());
  /// let markup = analyzer.annotate("君の名は").unwrap();
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }
}

impl Analyzer for VibratoAnalyzer {
  fn annotate(&self, text: &str) -> Result<String, AnalyzerError> {
    // worker holds the lattice, created each time
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(text = %text, num_tokens = worker.num_tokens(), "Start morphological analysis");

    let tokens = worker.token_iter().map(|token| {
      let surface = token.surface();
      let feature = token.feature();
      debug!(surface = %surface, ?feature, "Token");
      (surface.to_string(), feature.to_string())
    });

    Ok(render_tokens(tokens))
  }
}

/// Writes a token sequence `(surface, feature)` as ruby markup.
pub fn render_tokens<I, S, F>(tokens: I) -> String
where
  I: IntoIterator<Item = (S, F)>,
  S: AsRef<str>,
  F: AsRef<str>,
{
  let mut out = String::new();
  for (surface, feature) in tokens {
    let reading = reading_from_feature(feature.as_ref());
    markup::write_token(&mut out, surface.as_ref(), reading.as_deref());
  }
  out
}

/// Hiragana reading of a token, if its feature carries one.
///
/// Unknown words (`名詞,固有名詞,一般,*,*,*,*`) have no reading field, and
/// some dictionaries put `*` there.
pub fn reading_from_feature(feature: &str) -> Option<String> {
  feature
    .split(',')
    .nth(IDX_READING)
    .map(str::trim)
    .filter(|reading| !reading.is_empty() && *reading != "*")
    .map(script::katakana_to_hiragana)
}
