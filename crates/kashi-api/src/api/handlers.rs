//! HTTPハンドラー定義

use axum::{Json, extract::State};
use kashi::kana::gojuon_rows;
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{ConvertRequest, ConvertResponse, GojuonResponse, MorasRequest, MorasResponse};

use super::state::AppState;

/// POST /convert エンドポイント
///
/// 歌詞テキストをひらがな・ローマ字に変換する。
///
/// # Request Body
/// ```json
/// { "text": "君の名は\n夢を見る", "pipeline": "auto" }
/// ```
///
/// # Response
/// - 200 OK: 変換成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過、長すぎる行）
/// - 503 Service Unavailable: 解析器が使えない（pipeline = analyzer）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_convert(
  State(state): State<AppState>,
  Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
  debug!(
    text_len = request.text.len(),
    pipeline = ?request.pipeline,
    "変換リクエストを受信"
  );

  // 形態素解析は CPU バウンドなため、非同期ランタイムから分離して実行
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.convert(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    line_count = response.lines.len(),
    pipeline = %response.pipeline,
    elapsed_ms = response.elapsed_ms,
    "変換完了"
  );

  Ok(Json(response))
}

/// POST /moras エンドポイント
///
/// かなの読みをモーラに分割する。辞書は使わない。
/// 入力はトリムせずにそのまま分割するため、各モーラの `kana` を連結すると入力に戻る。
///
/// # Request Body
/// ```json
/// { "kana": "がっこう" }
/// ```
pub async fn post_moras(
  State(state): State<AppState>,
  Json(request): Json<MorasRequest>,
) -> Result<Json<MorasResponse>, ApiError> {
  debug!(kana_len = request.kana.len(), "モーラ分割リクエストを受信");

  let response = state.service.moras(request)?;
  Ok(Json(response))
}

/// GET /gojuon エンドポイント
///
/// 五十音図（11 行 × 5 列、空きマスは `null`）を返す。
pub async fn get_gojuon() -> Json<GojuonResponse> {
  Json(GojuonResponse { rows: gojuon_rows() })
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
