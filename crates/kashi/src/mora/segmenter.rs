//! Mora segmentation and romanization of a kana reading.
//!
//! Single left-to-right scan with at most two characters of lookahead:
//!
//! 1. current + small vowel kana -> one `Palatalized` mora, romanized as a pair
//! 2. small tsu -> `Geminate`, romanized as the first letter of the next mora
//!    (`'` at the end of the input)
//! 3. `ー` -> `LongVowel`, romanized as `-`
//! 4. anything else -> `Normal`, table lookup or the character itself
//!
//! Concatenating the `kana` of every mora gives back the input.

use crate::kana::table::{self, GLOTTAL_STOP, LONG_VOWEL_MARK, LONG_VOWEL_ROMAJI};
use crate::models::{Mora, MoraCategory};

/// Splits `reading` into moras.
///
/// Total over any input: characters missing from the kana table (kanji,
/// punctuation, latin) become `Normal` moras romanized as themselves.
pub fn segment(reading: &str) -> Vec<Mora> {
  let chars: Vec<char> = reading.chars().collect();
  let mut moras = Vec::with_capacity(chars.len());
  let mut i = 0;

  while i < chars.len() {
    let current = chars[i];

    if let Some(&next) = chars.get(i + 1).filter(|&&c| table::is_small_vowel(c)) {
      moras.push(Mora::new(
        String::from_iter([current, next]),
        romanize_pair(current, next),
        MoraCategory::Palatalized,
      ));
      i += 2;
      continue;
    }

    if table::is_geminate_mark(current) {
      moras.push(Mora::new(current, predict_geminate(&chars[i + 1..]), MoraCategory::Geminate));
      i += 1;
      continue;
    }

    if current == LONG_VOWEL_MARK {
      moras.push(Mora::new(current, LONG_VOWEL_ROMAJI, MoraCategory::LongVowel));
      i += 1;
      continue;
    }

    moras.push(Mora::new(current, romanize_char(current), MoraCategory::Normal));
    i += 1;
  }

  moras
}

/// Romanization of a small tsu, given everything after it.
///
/// First letter of the following mora's romanization; the following mora is a
/// pair when its second character is a small vowel kana.
pub(crate) fn predict_geminate(rest: &[char]) -> String {
  let following = match rest {
    [] => return GLOTTAL_STOP.to_string(),
    [first, second, ..] if table::is_small_vowel(*second) => romanize_pair(*first, *second),
    [first, ..] => romanize_char(*first),
  };
  following.chars().take(1).collect()
}

/// Table value of a single character, or the character itself.
pub(crate) fn romanize_char(c: char) -> String {
  table::romaji_of_char(c).map_or_else(|| c.to_string(), str::to_string)
}

/// Table value of a two-character unit. Pairs missing from the table (`あぃ`)
/// fall back to romanizing each character on its own.
pub(crate) fn romanize_pair(first: char, second: char) -> String {
  match table::romaji_of_pair(first, second) {
    Some(romaji) => romaji.to_string(),
    None => {
      let mut romaji = romanize_char(first);
      romaji.push_str(&romanize_char(second));
      romaji
    }
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  fn romaji(reading: &str) -> Vec<String> {
    segment(reading).into_iter().map(|m| m.romaji).collect()
  }

  fn kana_concat(moras: &[Mora]) -> String {
    moras.iter().map(|m| m.kana.as_str()).collect()
  }

  // ─── Rules ────────────────────────────────────────────────────────────

  #[test]
  fn geminate_takes_first_letter_of_next_mora() {
    assert_eq!(
      segment("った"),
      vec![
        Mora::new("っ", "t", MoraCategory::Geminate),
        Mora::new("た", "ta", MoraCategory::Normal),
      ]
    );
  }

  #[test]
  fn palatalized_pair_is_one_mora() {
    assert_eq!(segment("きゃ"), vec![Mora::new("きゃ", "kya", MoraCategory::Palatalized)]);
  }

  #[test]
  fn long_vowel_mark_is_a_hyphen() {
    assert_eq!(
      segment("らー"),
      vec![
        Mora::new("ら", "ra", MoraCategory::Normal),
        Mora::new("ー", "-", MoraCategory::LongVowel),
      ]
    );
  }

  #[test]
  fn geminate_at_end_is_glottal_stop() {
    let moras = segment("あっ");
    assert_eq!(moras.len(), 2);
    assert_eq!(moras[1].romaji, "'");
    assert_eq!(moras[1].category, MoraCategory::Geminate);
  }

  #[test]
  fn geminate_before_palatalized_pair() {
    let moras = segment("っきゃ");
    assert_eq!(moras.len(), 2);
    assert_eq!(moras[0], Mora::new("っ", "k", MoraCategory::Geminate));
    assert_eq!(moras[1], Mora::new("きゃ", "kya", MoraCategory::Palatalized));
  }

  #[test]
  fn katakana_geminate_and_pairs() {
    assert_eq!(romaji("キッチン"), vec!["ki", "c", "chi", "n"]);
    assert_eq!(romaji("ジャズ"), vec!["ja", "zu"]);
  }

  #[test]
  fn long_vowel_mark_anywhere() {
    assert_eq!(romaji("ーあ"), vec!["-", "a"]);
    assert_eq!(romaji("らーめん"), vec!["ra", "-", "me", "n"]);
    assert_eq!(romaji("すきー"), vec!["su", "ki", "-"]);
  }

  #[test]
  fn unknown_characters_pass_through() {
    let moras = segment("あ、!");
    assert_eq!(moras[1], Mora::new("、", "、", MoraCategory::Normal));
    assert_eq!(moras[2], Mora::new("!", "!", MoraCategory::Normal));
  }

  #[test]
  fn pair_missing_from_table_romanizes_each_half() {
    let moras = segment("あぃ");
    assert_eq!(moras, vec![Mora::new("あぃ", "ai", MoraCategory::Palatalized)]);
  }

  #[test]
  fn consecutive_geminates() {
    let moras = segment("っった");
    assert_eq!(moras[0].romaji, "っ");
    assert_eq!(moras[1].romaji, "t");
    assert_eq!(moras[2].romaji, "ta");
  }

  #[test]
  fn whole_lyric_reading() {
    assert_eq!(
      romaji("いっしょうけんめい"),
      vec!["i", "s", "sho", "u", "ke", "n", "me", "i"]
    );
    assert_eq!(romaji("ちょっと"), vec!["cho", "t", "to"]);
  }

  #[test]
  fn empty_reading_has_no_moras() {
    assert!(segment("").is_empty());
  }

  // ─── Properties ───────────────────────────────────────────────────────

  #[test]
  fn segmentation_is_lossless() {
    for reading in [
      "きゃっきゃ",
      "っ",
      "ー",
      "らーめん",
      "ゔぁいおりん",
      "がっこう",
      "ぁぃぅ",
      "キャッチ・ボール",
      "abc あ！",
      "おっきゃー",
    ] {
      assert_eq!(kana_concat(&segment(reading)), reading, "lossy: {reading}");
    }
  }

  #[test]
  fn predict_geminate_on_empty_rest() {
    assert_eq!(predict_geminate(&[]), "'");
    assert_eq!(predict_geminate(&['し', 'ゃ']), "s");
    assert_eq!(predict_geminate(&['ぱ']), "p");
  }

  // ─── Properties over generated readings ───────────────────────────────

  /// Hiragana, katakana, small kana, the prolonged sound mark and printable ASCII.
  fn arb_reading_char() -> impl Strategy<Value = char> {
    prop_oneof![
      4 => prop::char::range('\u{3041}', '\u{3096}'),
      3 => prop::char::range('\u{30A1}', '\u{30FA}'),
      2 => prop::sample::select(vec!['ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'っ', 'ッ', 'ャ']),
      1 => Just('ー'),
      1 => prop::char::range(' ', '~'),
    ]
  }

  fn arb_reading() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_reading_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
  }

  proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn segmentation_is_lossless_for_any_reading(reading in arb_reading()) {
      prop_assert_eq!(kana_concat(&segment(&reading)), reading);
    }

    #[test]
    fn segmentation_is_deterministic(reading in arb_reading()) {
      prop_assert_eq!(segment(&reading), segment(&reading));
    }

    #[test]
    fn every_mora_has_romaji(reading in arb_reading()) {
      for mora in segment(&reading) {
        prop_assert!(!mora.romaji.is_empty(), "empty romaji for {}", mora.kana);
      }
    }
  }
}
