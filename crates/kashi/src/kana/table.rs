//! Kana -> romaji table (Hepburn), single kana and digraphs.
//!
//! The table is keyed on hiragana. Lookups accept katakana too and normalize
//! it first, so `キャ` and `きゃ` resolve to the same entry.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::script;

/// Small kana that fuse with the preceding kana into one mora.
pub const SMALL_VOWEL_KANA: [char; 8] = ['ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ'];

/// Small tsu, hiragana and katakana.
pub const GEMINATE_MARKS: [char; 2] = ['っ', 'ッ'];

/// Prolonged sound mark.
pub const LONG_VOWEL_MARK: char = 'ー';

/// Romanization of a word-final geminate marker (glottal stop).
pub const GLOTTAL_STOP: &str = "'";

/// Romanization of the prolonged sound mark.
pub const LONG_VOWEL_ROMAJI: &str = "-";

#[rustfmt::skip]
static KANA_ROMAJI: &[(&str, &str)] = &[
  // vowels
  ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
  // k
  ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
  // s
  ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
  // t
  ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
  // n
  ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
  // h
  ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
  // m
  ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
  // y
  ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
  // r
  ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
  // w, n
  ("わ", "wa"), ("ゐ", "wi"), ("ゑ", "we"), ("を", "wo"),
  ("ん", "n"),

  // g
  ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
  // z
  ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
  // d
  ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
  // b
  ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
  // p
  ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
  // v
  ("ゔ", "vu"),

  // standalone small kana
  ("ぁ", "a"), ("ぃ", "i"), ("ぅ", "u"), ("ぇ", "e"), ("ぉ", "o"),
  ("ゃ", "ya"), ("ゅ", "yu"), ("ょ", "yo"), ("ゎ", "wa"),
  ("ゕ", "ka"), ("ゖ", "ke"),

  // prolonged sound mark
  ("ー", "-"),

  // palatalized digraphs
  ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"), ("きぇ", "kye"),
  ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"), ("ぎぇ", "gye"),
  ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"), ("しぇ", "she"),
  ("じゃ", "ja"),  ("じゅ", "ju"),  ("じょ", "jo"),  ("じぇ", "je"),
  ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"), ("ちぇ", "che"),
  ("ぢゃ", "ja"),  ("ぢゅ", "ju"),  ("ぢょ", "jo"),
  ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"), ("にぇ", "nye"),
  ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"), ("ひぇ", "hye"),
  ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
  ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
  ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
  ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),

  // loanword digraphs
  ("ふぁ", "fa"), ("ふぃ", "fi"), ("ふぇ", "fe"), ("ふぉ", "fo"), ("ふゅ", "fyu"),
  ("てぃ", "ti"), ("てゅ", "tyu"), ("でぃ", "di"), ("でゅ", "dyu"),
  ("とぅ", "tu"), ("どぅ", "du"),
  ("うぃ", "wi"), ("うぇ", "we"), ("うぉ", "wo"),
  ("ゔぁ", "va"), ("ゔぃ", "vi"), ("ゔぇ", "ve"), ("ゔぉ", "vo"), ("ゔゅ", "vyu"),
  ("つぁ", "tsa"), ("つぃ", "tsi"), ("つぇ", "tse"), ("つぉ", "tso"),
  ("いぇ", "ye"),
  ("くぁ", "kwa"), ("ぐぁ", "gwa"),
  ("すぃ", "si"), ("ずぃ", "zi"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| KANA_ROMAJI.iter().copied().collect());

/// Looks up the romanization of a one- or two-character kana string.
///
/// Katakana input is normalized to hiragana before the lookup.
pub fn romaji_of(kana: &str) -> Option<&'static str> {
  if let Some(romaji) = TABLE.get(kana).copied() {
    return Some(romaji);
  }
  if kana.chars().any(script::is_katakana) {
    let hiragana = script::katakana_to_hiragana(kana);
    return TABLE.get(hiragana.as_str()).copied();
  }
  None
}

/// Single-character lookup.
pub fn romaji_of_char(c: char) -> Option<&'static str> {
  let mut buf = [0u8; 4];
  romaji_of(c.encode_utf8(&mut buf))
}

/// Two-character lookup (digraph).
pub fn romaji_of_pair(first: char, second: char) -> Option<&'static str> {
  let mut key = String::with_capacity(8);
  key.push(first);
  key.push(second);
  romaji_of(&key)
}

/// Small ya/yu/yo or small vowel, hiragana or katakana.
pub fn is_small_vowel(c: char) -> bool {
  SMALL_VOWEL_KANA.contains(&script::katakana_to_hiragana_char(c))
}

/// Small tsu, hiragana or katakana.
pub fn is_geminate_mark(c: char) -> bool {
  GEMINATE_MARKS.contains(&c)
}

/// All table entries in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
  KANA_ROMAJI.iter().copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn basic_hepburn_spellings() {
    assert_eq!(romaji_of("し"), Some("shi"));
    assert_eq!(romaji_of("つ"), Some("tsu"));
    assert_eq!(romaji_of("ち"), Some("chi"));
    assert_eq!(romaji_of("ふ"), Some("fu"));
    assert_eq!(romaji_of("ん"), Some("n"));
    assert_eq!(romaji_of("を"), Some("wo"));
  }

  #[test]
  fn digraphs_are_single_units() {
    assert_eq!(romaji_of("きゃ"), Some("kya"));
    assert_eq!(romaji_of("しょ"), Some("sho"));
    assert_eq!(romaji_of("じゅ"), Some("ju"));
    assert_eq!(romaji_of_pair('ち', 'ゃ'), Some("cha"));
    assert_eq!(romaji_of_pair('ふ', 'ぁ'), Some("fa"));
  }

  #[test]
  fn katakana_lookups_normalize_to_hiragana() {
    assert_eq!(romaji_of("キャ"), Some("kya"));
    assert_eq!(romaji_of_char('ア'), Some("a"));
    assert_eq!(romaji_of_pair('ヴ', 'ァ'), Some("va"));
  }

  #[test]
  fn unknown_characters_are_absent() {
    assert_eq!(romaji_of("漢"), None);
    assert_eq!(romaji_of_char('!'), None);
    assert_eq!(romaji_of_char('っ'), None);
  }

  #[test]
  fn small_vowel_set() {
    for c in SMALL_VOWEL_KANA {
      assert!(is_small_vowel(c));
    }
    assert!(is_small_vowel('ャ'));
    assert!(!is_small_vowel('や'));
    assert!(!is_small_vowel('っ'));
    assert!(!is_small_vowel('ゎ'));
  }

  #[test]
  fn geminate_marks() {
    assert!(is_geminate_mark('っ'));
    assert!(is_geminate_mark('ッ'));
    assert!(!is_geminate_mark('つ'));
  }

  #[test]
  fn table_keys_are_unique() {
    let keys: Vec<&str> = entries().map(|(k, _)| k).collect();
    let unique: std::collections::HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(keys.len(), unique.len());
  }

  #[test]
  fn table_keys_are_one_or_two_chars() {
    for (kana, _) in entries() {
      let len = kana.chars().count();
      assert!((1..=2).contains(&len), "unexpected key length: {kana}");
    }
  }
}
