//! Response Model Definition

use kashi::kana::GojuonRow;
use kashi::{LyricLine, Mora, Pipeline};
use serde::Serialize;

/// Lyrics Conversion Response
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
  /// Converted lines in input order (blank lines dropped)
  pub lines: Vec<LyricLine>,
  /// Pipeline that produced `lines` (`analyzer` or `fallback`)
  pub pipeline: Pipeline,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Mora Segmentation Response
#[derive(Debug, Serialize)]
pub struct MorasResponse {
  /// Moras covering the whole reading
  pub moras: Vec<Mora>,
}

/// Gojuon Chart Response
#[derive(Debug, Serialize)]
pub struct GojuonResponse {
  /// 11 rows of 5 cells, `null` for the gaps
  pub rows: Vec<GojuonRow>,
}

#[cfg(test)]
mod tests {
  use kashi::MoraCategory;

  use super::*;

  #[test]
  fn convert_response_serialization() {
    let response = ConvertResponse {
      lines: vec![LyricLine::rendered("夢", "ゆめ", "yu me")],
      pipeline: Pipeline::Fallback,
      elapsed_ms: 42,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"lines\""));
    assert!(json.contains("\"pipeline\":\"fallback\""));
    assert!(json.contains("\"elapsed_ms\":42"));
    assert!(json.contains("\"romaji\":\"yu me\""));
  }

  #[test]
  fn moras_response_serialization() {
    let response = MorasResponse {
      moras: vec![Mora::new("きゃ", "kya", MoraCategory::Palatalized)],
    };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"moras":[{"kana":"きゃ","romaji":"kya","category":"palatalized"}]}"#);
  }

  #[test]
  fn gojuon_response_has_null_gaps() {
    let response = GojuonResponse {
      rows: kashi::kana::gojuon_rows(),
    };
    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 11);
    assert!(json["rows"][7][1].is_null());
    assert_eq!(json["rows"][2][1]["romaji"], "shi");
  }
}
