//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 歌詞 1 曲分としては十分に大きい 1MB まで許可する。
/// axum のデフォルトのリクエストサイズ上限（2MB）より小さいため、
/// 超過は 413 ではなく `text_too_long` として返る。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトの辞書プリセット名
///
/// 最も小さい IPADIC をデフォルトとして使用。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// デフォルトの変換パイプライン名
pub const DEFAULT_PIPELINE: &str = "auto";
