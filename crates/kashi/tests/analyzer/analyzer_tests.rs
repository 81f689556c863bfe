//! analyzer モジュール用統合テスト
//! tests/analyzer/analyzer_tests.rs

use vibrato_rkyv::dictionary::PresetDictionaryKind;
use kashi::analyzer::{Analyzer, VibratoAnalyzer};
use kashi::dictionary::DictionaryManager;
use kashi::furigana;

/// 辞書キャッシュがあれば VibratoAnalyzer を構築する。なければ None（スキップ）。
fn cached_analyzer() -> Option<VibratoAnalyzer> {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager 構築失敗");

  if !manager.cache_dir().join(PresetDictionaryKind::Ipadic.name()).exists() {
    eprintln!("辞書キャッシュが存在しないためスキップ");
    return None;
  }

  let dict = manager.load().expect("辞書ロード失敗");
  Some(VibratoAnalyzer::from_shared_dictionary(dict))
}

/// VibratoAnalyzer が漢字にだけルビを付けることを確認。
///
/// 辞書キャッシュが必要（サンプル `example_kashi` を一度実行すれば IPADIC がダウンロードされる）
#[test]
fn annotate_basic_sentence() {
  let Some(analyzer) = cached_analyzer() else {
    return;
  };

  let markup = analyzer.annotate("東京の空").expect("解析失敗");
  println!("markup: {markup}");

  assert!(markup.contains("<ruby>東京<rp>(</rp><rt>とうきょう</rt><rp>)</rp></ruby>"));
  assert!(markup.contains("<ruby>空<rp>(</rp><rt>そら</rt><rp>)</rp></ruby>"));
  assert!(!markup.contains("<rt>の</rt>"), "かなにはルビを付けない");
}

/// 送り仮名がルビの外に出ることを確認。
#[test]
fn annotate_keeps_okurigana_outside_ruby() {
  let Some(analyzer) = cached_analyzer() else {
    return;
  };

  let markup = analyzer.annotate("歩く").expect("解析失敗");
  assert_eq!(markup, "<ruby>歩<rp>(</rp><rt>ある</rt><rp>)</rp></ruby>く");
}

/// 解析結果のマークアップがパーサーで元の順序のまま読めることを確認。
#[test]
fn annotated_markup_round_trips_through_parser() {
  let Some(analyzer) = cached_analyzer() else {
    return;
  };

  let text = "夢を見る";
  let markup = analyzer.annotate(text).expect("解析失敗");
  let words = furigana::parse(&markup);

  let surfaces: String =
    words.iter().map(|w| if w.is_annotated() { w.surface.clone() } else { w.kana() }).collect();
  assert_eq!(surfaces, text);
}

/// 空文字列でも失敗しないことを確認。
#[test]
fn annotate_empty_text() {
  let Some(analyzer) = cached_analyzer() else {
    return;
  };

  assert_eq!(analyzer.annotate("").expect("解析失敗"), "");
}
