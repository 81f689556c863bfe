//! 五十音図（gojuon chart）
//!
//! 基本の 46 字を 5 列 × 11 行に並べたもの。空きマス（や行の い・え 等）は `None`。
//! ローマ字はローマ字表（[`super::table`]）から引くため、表と変換結果が食い違うことはない。

use serde::Serialize;

use super::script;
use super::table;

/// 五十音図の 1 マス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GojuonCell {
  /// ひらがな
  pub hiragana: char,
  /// カタカナ
  pub katakana: char,
  /// ヘボン式ローマ字
  pub romaji: &'static str,
}

/// 五十音図の 1 行（あ段〜お段の 5 列）
pub type GojuonRow = [Option<GojuonCell>; 5];

#[rustfmt::skip]
const LAYOUT: [[Option<char>; 5]; 11] = [
  [Some('あ'), Some('い'), Some('う'), Some('え'), Some('お')],
  [Some('か'), Some('き'), Some('く'), Some('け'), Some('こ')],
  [Some('さ'), Some('し'), Some('す'), Some('せ'), Some('そ')],
  [Some('た'), Some('ち'), Some('つ'), Some('て'), Some('と')],
  [Some('な'), Some('に'), Some('ぬ'), Some('ね'), Some('の')],
  [Some('は'), Some('ひ'), Some('ふ'), Some('へ'), Some('ほ')],
  [Some('ま'), Some('み'), Some('む'), Some('め'), Some('も')],
  [Some('や'), None,      Some('ゆ'), None,      Some('よ')],
  [Some('ら'), Some('り'), Some('る'), Some('れ'), Some('ろ')],
  [Some('わ'), None,      None,      None,      Some('を')],
  [Some('ん'), None,      None,      None,      None],
];

/// 五十音図の全行を返す
pub fn gojuon_rows() -> Vec<GojuonRow> {
  LAYOUT.into_iter().map(|row| row.map(|slot| slot.and_then(cell))).collect()
}

fn cell(hiragana: char) -> Option<GojuonCell> {
  Some(GojuonCell {
    hiragana,
    katakana: script::hiragana_to_katakana_char(hiragana),
    romaji: table::romaji_of_char(hiragana)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chart_has_forty_six_cells() {
    let count = gojuon_rows().iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(count, 46);
  }

  #[test]
  fn chart_rows_match_table() {
    let rows = gojuon_rows();
    assert_eq!(rows.len(), 11);

    let shi = rows[2][1].as_ref().unwrap();
    assert_eq!(shi.hiragana, 'し');
    assert_eq!(shi.katakana, 'シ');
    assert_eq!(shi.romaji, "shi");

    let wo = rows[9][4].as_ref().unwrap();
    assert_eq!(wo.katakana, 'ヲ');
    assert_eq!(wo.romaji, "wo");
  }

  #[test]
  fn gaps_are_empty() {
    let rows = gojuon_rows();
    assert!(rows[7][1].is_none());
    assert!(rows[7][3].is_none());
    assert!(rows[10][1..].iter().all(Option::is_none));
  }
}
