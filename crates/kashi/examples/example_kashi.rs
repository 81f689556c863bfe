//! kashi crate example
//!
//! Converts a few lyric lines with the pipeline from an inline TOML config and
//! prints the export text plus the mora breakdown of every word.
//!
//! ```bash
//! KASHI_LOG=debug cargo run -p kashi --example example_kashi
//! ```

use tracing_subscriber::EnvFilter;
use kashi::config::KashiConfig;
use kashi::kana::gojuon_rows;
use kashi::mora::segment;
use kashi::{KashiService, Pipeline};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

const CONFIG: &str = r#"
[dictionary]
preset = "ipadic"

[conversion]
pipeline = "auto"
max_line_bytes = 4096

[logging]
level = "info"
"#;

const LYRICS: &str = "君の名は
明日また会おう

ラブソングを歌って
一生懸命走った青空";

fn main() -> AppResult<()> {
  let config = KashiConfig::from_toml_str(CONFIG)?;

  // KASHI_LOG wins over the configured level
  let filter = EnvFilter::try_from_env("KASHI_LOG")
    .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_str()));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  // 1. Build the service (downloads the dictionary on first run)
  let service = KashiService::init(&config)?;
  println!("analyzer available: {}", service.has_analyzer());

  // 2. Convert with the configured pipeline
  let conversion = service.convert_text(LYRICS)?;
  println!("\n===== Export ({}) =====", conversion.pipeline);
  println!("{}", conversion.export());

  // 3. Mora breakdown (analyzer pipeline only)
  println!("\n===== Moras =====");
  for line in &conversion.lines {
    for word in &line.words {
      let moras: Vec<String> =
        word.moras.iter().map(|m| format!("{}:{}:{:?}", m.kana, m.romaji, m.category)).collect();
      println!("{:8} {}", word.surface, moras.join(" "));
    }
  }

  // 4. Same text through the static tables
  let fallback = service.convert_text_with(LYRICS, Pipeline::Fallback)?;
  println!("\n===== Export (fallback) =====");
  println!("{}", fallback.export());

  // 5. Segmenting a reading directly
  println!("\n===== segment(\"きゃっきゃ\") =====");
  for mora in segment("きゃっきゃ") {
    println!("{}\t{}\t{:?}", mora.kana, mora.romaji, mora.category);
  }

  // 6. Gojuon chart
  println!("\n===== Gojuon =====");
  for row in gojuon_rows() {
    let cells: Vec<String> = row
      .iter()
      .map(|cell| match cell {
        Some(c) => format!("{}{:<3}", c.hiragana, c.romaji),
        None => "    ".to_string(),
      })
      .collect();
    println!("{}", cells.join(" "));
  }

  Ok(())
}
