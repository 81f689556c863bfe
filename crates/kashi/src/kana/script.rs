//! Character-level script classification and kana normalization.

use super::table::{self, LONG_VOWEL_MARK};

/// Offset between a katakana code point and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Full hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
  ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full katakana block (U+30A0..U+30FF). Includes the prolonged sound mark ー.
pub fn is_katakana(c: char) -> bool {
  ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK unified ideographs (base block, extension A, extension B) plus the
/// iteration mark 々, which always sits inside a kanji word.
pub fn is_kanji(c: char) -> bool {
  ('\u{4E00}'..='\u{9FFF}').contains(&c)
    || ('\u{3400}'..='\u{4DBF}').contains(&c)
    || ('\u{20000}'..='\u{2A6DF}').contains(&c)
    || c == '々'
}

/// Hiragana or katakana.
pub fn is_kana(c: char) -> bool {
  is_hiragana(c) || is_katakana(c)
}

/// Returns true if `text` contains at least one kanji.
pub fn contains_kanji(text: &str) -> bool {
  text.chars().any(is_kanji)
}

/// Converts one katakana character to hiragana.
///
/// Only the letters ァ..ヶ and the iteration marks ヽヾ have hiragana
/// counterparts; everything else (ー, ・, ASCII, kanji) is returned as is.
pub fn katakana_to_hiragana_char(c: char) -> char {
  let convertible = ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c);
  if convertible { char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c) } else { c }
}

/// Converts one hiragana character to katakana. Non-hiragana passes through.
pub fn hiragana_to_katakana_char(c: char) -> char {
  let convertible = ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c);
  if convertible { char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c) } else { c }
}

/// Converts every katakana letter in `text` to hiragana.
pub fn katakana_to_hiragana(text: &str) -> String {
  text.chars().map(katakana_to_hiragana_char).collect()
}

/// Converts every hiragana letter in `text` to katakana.
pub fn hiragana_to_katakana(text: &str) -> String {
  text.chars().map(hiragana_to_katakana_char).collect()
}

/// Generic hiragana normalization.
///
/// - Katakana letters become hiragana.
/// - A prolonged sound mark directly after a kana whose romanization ends in a
///   vowel is spelled out as that vowel's hiragana (`ラー` -> `らあ`).
/// - A prolonged sound mark anywhere else stays `ー`.
/// - Anything that is not kana (romaji, digits, punctuation) passes through.
pub fn normalize_hiragana(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut previous: Option<char> = None;

  for c in text.chars() {
    let c = katakana_to_hiragana_char(c);
    let normalized = if c == LONG_VOWEL_MARK {
      previous.and_then(vowel_kana_of).unwrap_or(LONG_VOWEL_MARK)
    } else {
      c
    };
    out.push(normalized);
    previous = Some(normalized);
  }

  out
}

/// Returns the hiragana vowel a kana ends on, e.g. `か` -> `あ`, `ゃ` -> `あ`.
fn vowel_kana_of(c: char) -> Option<char> {
  if !is_hiragana(c) {
    return None;
  }
  let romaji = table::romaji_of_char(c)?;
  match romaji.chars().last()? {
    'a' => Some('あ'),
    'i' => Some('い'),
    'u' => Some('う'),
    'e' => Some('え'),
    'o' => Some('お'),
    _ => None,
  }
}
