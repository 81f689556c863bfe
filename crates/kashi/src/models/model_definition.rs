//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Phonological category of a mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoraCategory {
  /// A plain kana.
  Normal,
  /// Small tsu; romanized as the first consonant of the following mora.
  Geminate,
  /// A kana fused with the small kana that follows it (`きゃ`, `ふぁ`).
  Palatalized,
  /// The prolonged sound mark `ー`.
  LongVowel,
}

/// The atomic output unit: one (or two, when palatalized) kana and its romanization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mora {
  /// Kana this mora covers
  pub kana: String,
  /// Lowercase romanization, or the kana itself when it has none
  pub romaji: String,
  /// Phonological category
  pub category: MoraCategory,
}

impl Mora {
  /// Constructor for Mora
  pub fn new(kana: impl Into<String>, romaji: impl Into<String>, category: MoraCategory) -> Self {
    Self { kana: kana.into(), romaji: romaji.into(), category }
  }
}

/// One rendered word: an analyzer token or a contiguous unannotated run.
///
/// `surface` is empty for plain kana / punctuation runs. When it is not empty,
/// `moras` comes from the annotated reading, never from the surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
  /// Original script shown above the reading (empty for plain runs)
  pub surface: String,
  /// Moras covering the word's reading
  pub moras: Vec<Mora>,
}

impl Word {
  /// A word that carries a furigana annotation.
  pub fn annotated(surface: impl Into<String>, moras: Vec<Mora>) -> Self {
    Self { surface: surface.into(), moras }
  }

  /// A plain run with no annotation above it.
  pub fn plain(moras: Vec<Mora>) -> Self {
    Self { surface: String::new(), moras }
  }

  /// Whether the word carries an annotation.
  pub fn is_annotated(&self) -> bool {
    !self.surface.is_empty()
  }

  /// The reading, i.e. every mora's kana concatenated.
  pub fn kana(&self) -> String {
    self.moras.iter().map(|m| m.kana.as_str()).collect()
  }

  /// Every mora's romanization concatenated.
  pub fn romaji(&self) -> String {
    self.moras.iter().map(|m| m.romaji.as_str()).collect()
  }
}

/// One converted input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
  /// Words in document order
  pub words: Vec<Word>,
}

impl Line {
  /// Constructor for Line
  pub fn new(words: Vec<Word>) -> Self {
    Self { words }
  }

  /// Hiragana rendering: every word's kana, no separators.
  pub fn hiragana(&self) -> String {
    self.words.iter().map(Word::kana).collect()
  }

  /// Romaji rendering: every word's romaji, separated by a single space.
  pub fn romaji(&self) -> String {
    self
      .words
      .iter()
      .map(Word::romaji)
      .filter(|r| !r.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
  }
}

/// A lyric line as shown to the user: original, hiragana and romaji.
///
/// `words` is filled by the analyzer pipeline only; the static-table
/// pipeline renders the two strings directly and leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
  /// Input line, trimmed
  pub original: String,
  /// Hiragana rendering
  pub hiragana: String,
  /// Romaji rendering
  pub romaji: String,
  /// Word / mora breakdown (analyzer pipeline only)
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub words: Vec<Word>,
}

impl LyricLine {
  /// Renders a [`Line`] produced by the analyzer pipeline.
  pub fn from_line(original: impl Into<String>, line: Line) -> Self {
    Self {
      original: original.into(),
      hiragana: line.hiragana(),
      romaji: line.romaji(),
      words: line.words,
    }
  }

  /// A line rendered without a word breakdown.
  pub fn rendered(
    original: impl Into<String>,
    hiragana: impl Into<String>,
    romaji: impl Into<String>,
  ) -> Self {
    Self {
      original: original.into(),
      hiragana: hiragana.into(),
      romaji: romaji.into(),
      words: Vec::new(),
    }
  }
}

/// Joins converted lines into the copy/export text:
/// `original`, `hiragana`, `romaji` on consecutive lines, one blank line
/// between blocks, no trailing whitespace.
pub fn export_lines(lines: &[LyricLine]) -> String {
  let mut out = String::new();
  for line in lines {
    out.push_str(&line.original);
    out.push('\n');
    out.push_str(&line.hiragana);
    out.push('\n');
    out.push_str(&line.romaji);
    out.push_str("\n\n");
  }
  out.trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
