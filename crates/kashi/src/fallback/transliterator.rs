//! Static-table transliteration.
//!
//! Three passes over one line:
//!
//! 1. kanji -> kana, greedy longest match against the kanji dictionary
//! 2. hiragana normalization (katakana, prolonged sound mark)
//! 3. kana -> romaji, digraph first, one space between romanized units
//!
//! Every pass is total: characters the tables do not know pass through.

use serde::Serialize;
use tracing::debug;

use crate::kana::kanji_dictionary::{self, MAX_KEY_CHARS};
use crate::kana::script;
use crate::kana::table::{self, GLOTTAL_STOP};

/// Result of [`transliterate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transliteration {
  /// Normalized hiragana
  pub kana: String,
  /// Space separated romaji
  pub romaji: String,
}

/// Runs all three passes over `text`.
pub fn transliterate(text: &str) -> Transliteration {
  let kana = script::normalize_hiragana(&kanji_to_kana(text));
  let romaji = romanize(&kana);
  debug!(text = %text, kana = %kana, romaji = %romaji, "Fallback transliteration");
  Transliteration { kana, romaji }
}

/// Kanji pass: replaces dictionary words with their kana, longest key first.
///
/// Characters without an entry are kept, katakana converted to hiragana.
pub fn kanji_to_kana(text: &str) -> String {
  let chars: Vec<char> = text.chars().collect();
  let mut out = String::with_capacity(text.len());
  let mut i = 0;

  'scan: while i < chars.len() {
    let longest = MAX_KEY_CHARS.min(chars.len() - i);
    for len in (1..=longest).rev() {
      let key: String = chars[i..i + len].iter().collect();
      if let Some(kana) = kanji_dictionary::lookup(&key) {
        out.push_str(kana);
        i += len;
        continue 'scan;
      }
    }
    out.push(script::katakana_to_hiragana_char(chars[i]));
    i += 1;
  }

  out
}

/// Romanization pass over a kana string.
///
/// One unit per position, units joined by a single space:
///
/// - a two-character table entry (`きゃ`) wins over its first character
/// - otherwise the single-character entry, or the character itself
///   (whitespace and latin included)
/// - small tsu doubles the first letter of the next unit when that unit has a
///   table entry, otherwise it becomes `'` on the previous unit
pub fn romanize(kana: &str) -> String {
  let chars: Vec<char> = kana.chars().collect();
  let mut units: Vec<String> = Vec::new();
  let mut geminate: Option<char> = None;
  let mut i = 0;

  while i < chars.len() {
    let current = chars[i];

    if table::is_geminate_mark(current) {
      match table_unit(&chars[i + 1..]) {
        Some((romaji, _)) => geminate = romaji.chars().next(),
        None => match units.last_mut() {
          Some(last) => last.push_str(GLOTTAL_STOP),
          None => units.push(GLOTTAL_STOP.to_string()),
        },
      }
      i += 1;
      continue;
    }

    match table_unit(&chars[i..]) {
      Some((romaji, width)) => {
        let mut unit: String = geminate.take().into_iter().collect();
        unit.push_str(romaji);
        units.push(unit);
        i += width;
      }
      None => {
        units.push(current.to_string());
        i += 1;
      }
    }
  }

  units.join(" ")
}

/// Table entry at the start of `rest`: the two-character lookup first, then
/// the single character. Returns the romaji and the number of characters used.
fn table_unit(rest: &[char]) -> Option<(&'static str, usize)> {
  match rest {
    [first, second, ..] if table::romaji_of_pair(*first, *second).is_some() => {
      table::romaji_of_pair(*first, *second).map(|romaji| (romaji, 2))
    }
    [first, ..] => table::romaji_of_char(*first).map(|romaji| (romaji, 1)),
    [] => None,
  }
}
