//! # ヘルスチェックハンドラ
//!
//! User Service の稼働状態を確認するためのエンドポイント。
//!
//! レスポンス型は [`roster_shared::HealthResponse`] を参照。

use axum::Json;
use roster_shared::HealthResponse;

/// User Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
