//! 形態素解析器に渡す前の字句置換（LexicalOverride）
//!
//! 解析器が誤読しやすい語を、あらかじめ正しいかな表記に置き換える。
//! 置換は表の宣言順に 1 エントリにつき 1 パス（左から右、重なりなし）で行う。
//! 後のエントリが前のエントリの置換結果を書き換えることは許容している。

use tracing::trace;

/// 置換表（宣言順に適用）
#[rustfmt::skip]
static OVERRIDES: &[(&str, &str)] = &[
  ("明日", "あした"),
  ("一人", "ひとり"),
  ("二人", "ふたり"),
  ("貴方", "あなた"),
  ("何故", "なぜ"),
  ("行方", "ゆくえ"),
  ("煌めく", "きらめく"),
  ("眩しい", "まぶしい"),
  ("儚い", "はかない"),
  ("微笑", "ほほえ"),
  ("刹那", "せつな"),
  ("宿命", "さだめ"),
  ("故郷", "ふるさと"),
  ("永久", "とわ"),
  ("此処", "ここ"),
  ("其処", "そこ"),
];

/// `line` に置換表を順に適用した新しい文字列を返す。
///
/// 一致がなければ入力と同じ内容を返す。
pub fn apply_overrides(line: &str) -> String {
  let mut text = line.to_string();
  for (pattern, replacement) in OVERRIDES {
    if text.contains(pattern) {
      text = text.replace(pattern, replacement);
      trace!(pattern, replacement, "字句置換を適用");
    }
  }
  text
}

/// 置換表の全エントリ（宣言順）
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
  OVERRIDES.iter().copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replaces_known_misreadings() {
    assert_eq!(apply_overrides("明日また会おう"), "あしたまた会おう");
    assert_eq!(apply_overrides("二人の行方"), "ふたりのゆくえ");
  }

  #[test]
  fn replaces_every_occurrence() {
    assert_eq!(apply_overrides("一人一人"), "ひとりひとり");
  }

  #[test]
  fn unmatched_input_is_unchanged() {
    assert_eq!(apply_overrides("君の名は"), "君の名は");
    assert_eq!(apply_overrides(""), "");
  }

  #[test]
  fn applying_twice_equals_applying_once() {
    for input in ["明日の二人", "貴方は何故", "永久に此処で", "微笑んだ刹那", "ふつうの文"] {
      let once = apply_overrides(input);
      assert_eq!(apply_overrides(&once), once, "not idempotent: {input}");
    }
  }

  /// 冪等性の前提: どの置換結果も、どのキーも含まない
  #[test]
  fn no_replacement_reintroduces_a_key() {
    for (_, replacement) in entries() {
      for (pattern, _) in entries() {
        assert!(
          !replacement.contains(pattern),
          "{replacement} contains override key {pattern}"
        );
      }
    }
  }
}
