//! # Canonical Log Line ミドルウェア
//!
//! リクエスト完了時に、ステータスコードと処理時間を 1 行に集約した
//! サマリログを出力する。`TraceLayer` の内側に配置し、
//! `request` スパンのフィールド（method, uri, request_id）をログに含める。
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → canonical_log_line → handler
//! ```

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// ヘルスチェックパスかどうかを判定する
fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力するミドルウェア
///
/// INFO レベルで `log.type = "canonical"` マーカー付きのログを出力する。
/// ヘルスチェックは出力対象外。
pub async fn canonical_log_line(request: Request<Body>, next: Next) -> Response {
    if is_health_check_path(request.uri().path()) {
        return next.run(request).await;
    }

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        log.r#type = "canonical",
        http.status_code = response.status().as_u16(),
        http.latency_ms = latency_ms,
        "リクエスト完了"
    );

    response
}
