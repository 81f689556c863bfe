//! リクエストモデル定義

use kashi::Pipeline;
use serde::Deserialize;

/// 歌詞変換リクエスト
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
  /// 変換対象のテキスト（複数行可）
  pub text: String,
  /// 使用するパイプライン（省略時はサーバーのデフォルト）
  #[serde(default)]
  pub pipeline: Option<Pipeline>,
}

/// モーラ分割リクエスト
#[derive(Debug, Deserialize)]
pub struct MorasRequest {
  /// かなの読み
  pub kana: String,
}
