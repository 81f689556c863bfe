//! Ruby markup writer.
//!
//! Output format, one element per annotated span:
//!
//! ```text
//! <ruby>食<rp>(</rp><rt>た</rt><rp>)</rp></ruby>べる
//! ```
//!
//! Plain text is written as is, with `&`, `<` and `>` escaped.

use crate::kana::script;

/// Escapes markup-significant characters.
pub fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(c),
    }
  }
  out
}

/// Reverses [`escape`], plus `&quot;` and `&#39;`. Unknown entities are kept verbatim.
pub fn unescape(text: &str) -> String {
  if !text.contains('&') {
    return text.to_string();
  }
  text
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&amp;", "&")
}

/// One ruby element.
pub fn ruby(base: &str, reading: &str) -> String {
  format!("<ruby>{}<rp>(</rp><rt>{}</rt><rp>)</rp></ruby>", escape(base), escape(reading))
}

/// Writes one analyzer token.
///
/// `reading` is the token's hiragana reading, if the dictionary had one. Tokens
/// without kanji or without a reading are written as plain text. Kana shared by
/// the start or end of surface and reading (okurigana, honorific prefixes) is
/// written outside the ruby element so that the annotation sits on the kanji only.
pub fn write_token(out: &mut String, surface: &str, reading: Option<&str>) {
  let reading = match reading {
    Some(r) if !r.is_empty() && script::contains_kanji(surface) => r,
    _ => {
      out.push_str(&escape(surface));
      return;
    }
  };

  let surface_chars: Vec<char> = surface.chars().collect();
  let reading_chars: Vec<char> = reading.chars().collect();
  let (prefix, suffix) = shared_kana(&surface_chars, &reading_chars);

  let core_surface: String = surface_chars[prefix..surface_chars.len() - suffix].iter().collect();
  let core_reading: String = reading_chars[prefix..reading_chars.len() - suffix].iter().collect();

  if core_surface.is_empty() || core_reading.is_empty() {
    out.push_str(&ruby(surface, reading));
    return;
  }

  let head: String = surface_chars[..prefix].iter().collect();
  let tail: String = surface_chars[surface_chars.len() - suffix..].iter().collect();
  out.push_str(&escape(&head));
  out.push_str(&ruby(&core_surface, &core_reading));
  out.push_str(&escape(&tail));
}

/// Lengths of the kana prefix and suffix shared by surface and reading.
/// The two never overlap and always leave at least one character of each side.
fn shared_kana(surface: &[char], reading: &[char]) -> (usize, usize) {
  let same = |s: char, r: char| script::is_kana(s) && script::katakana_to_hiragana_char(s) == r;
  let limit = surface.len().min(reading.len()).saturating_sub(1);

  let prefix = surface.iter().zip(reading).take(limit).take_while(|(s, r)| same(**s, **r)).count();

  let suffix = surface
    .iter()
    .rev()
    .zip(reading.iter().rev())
    .take(limit - prefix)
    .take_while(|(s, r)| same(**s, **r))
    .count();

  (prefix, suffix)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn token(surface: &str, reading: Option<&str>) -> String {
    let mut out = String::new();
    write_token(&mut out, surface, reading);
    out
  }

  #[test]
  fn kanji_token_becomes_ruby() {
    assert_eq!(token("夢", Some("ゆめ")), "<ruby>夢<rp>(</rp><rt>ゆめ</rt><rp>)</rp></ruby>");
  }

  #[test]
  fn okurigana_stays_outside() {
    assert_eq!(
      token("食べる", Some("たべる")),
      "<ruby>食<rp>(</rp><rt>た</rt><rp>)</rp></ruby>べる"
    );
  }

  #[test]
  fn kana_prefix_stays_outside() {
    assert_eq!(token("お茶", Some("おちゃ")), "お<ruby>茶<rp>(</rp><rt>ちゃ</rt><rp>)</rp></ruby>");
  }

  #[test]
  fn kana_token_is_plain() {
    assert_eq!(token("の", Some("の")), "の");
    assert_eq!(token("ラブ", Some("らぶ")), "ラブ");
  }

  #[test]
  fn kanji_without_reading_is_plain() {
    assert_eq!(token("鬱", None), "鬱");
    assert_eq!(token("鬱", Some("")), "鬱");
  }

  #[test]
  fn plain_text_is_escaped() {
    assert_eq!(token("<3", None), "&lt;3");
    assert_eq!(escape("a&b"), "a&amp;b");
  }

  #[test]
  fn unescape_reverses_escape() {
    let text = "<tag> & \"quote\" 'single'";
    assert_eq!(unescape(&escape(text)), text);
    assert_eq!(unescape("&quot;&#39;"), "\"'");
    assert_eq!(unescape("&unknown;"), "&unknown;");
  }

  #[test]
  fn shared_kana_never_consumes_everything() {
    // surface and reading identical apart from the kanji
    let surface: Vec<char> = "見る".chars().collect();
    let reading: Vec<char> = "みる".chars().collect();
    assert_eq!(shared_kana(&surface, &reading), (0, 1));
  }
}
