//! dictionary 用のテスト
//! 辞書管理の統合テスト

use vibrato_rkyv::dictionary::PresetDictionaryKind;
use kashi::dictionary::DictionaryManager;
use kashi::errors::DictionaryError;

/// DictionaryManager のコンストラクタが正常に動作することを確認する。
#[test]
fn create_dictionary_manager_with_preset() {
  let result = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic);

  // コンストラクタ自体はネットワーク不要なので成功するはず
  assert!(
    result.is_ok(),
    "DictionaryManager の構築に失敗: {:?}",
    result.err()
  );
}

/// キャッシュディレクトリーを指定した場合、ロードするまで何も作成されないことを確認する。
#[test]
fn with_preset_in_is_lazy() {
  let tmp = tempfile::tempdir().expect("一時ディレクトリーの作成に失敗");
  let cache_dir = tmp.path().join("dict");

  let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, &cache_dir);

  assert_eq!(manager.cache_dir(), cache_dir.as_path());
  assert!(!cache_dir.exists(), "ロード前にディレクトリーが作成されている");
  assert!(!manager.is_cached());
}

/// 存在しないパスを指定した場合にエラーが返ることを確認する。
#[test]
fn from_local_path_with_nonexistent_file() {
  let result = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic");

  assert!(result.is_err());
  let err = result.unwrap_err();
  // DictionaryError::DictionaryNotFound であることを確認
  assert!(
    matches!(err, DictionaryError::DictionaryNotFound(_)),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// プリセット辞書のダウンロード＆ロード テスト。
///
/// ネットワークアクセスと大容量ファイルの処理が必要なため
/// `#[ignore]` を付けている。
///
/// 実行方法:
/// ```bash
/// cargo test -- --ignored download_and_load_ipadic
/// ```
#[test]
#[ignore = "辞書ダウンロードは時間がかかるため通常テストから除外"]
fn download_and_load_ipadic() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  // 辞書をロード（初回はダウンロードが発生する）
  let dict = manager.load();
  assert!(dict.is_ok(), "辞書のロードに失敗: {:?}", dict.err());

  // 2回目のロードはキャッシュから取得される
  let dict2 = manager.load();
  assert!(dict2.is_ok(), "2回目のロードに失敗");
  assert!(manager.is_cached());
}

/// キャッシュ済み辞書のロードテスト。
///
/// 事前に `download_and_load_ipadic` を実行して
/// 辞書がキャッシュされている場合にのみ有効。
/// キャッシュが存在しない場合は自動スキップする。
#[test]
fn load_cached_dictionary() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  // キャッシュが存在するかチェック
  let dict_subdir = manager.cache_dir().join(PresetDictionaryKind::Ipadic.name());

  if !dict_subdir.exists() {
    eprintln!(
      "辞書キャッシュが存在しないためスキップ: {}",
      dict_subdir.display()
    );
    return;
  }

  // キャッシュからロード
  let dict = manager.load();
  assert!(
    dict.is_ok(),
    "キャッシュ辞書のロードに失敗: {:?}",
    dict.err()
  );
}
