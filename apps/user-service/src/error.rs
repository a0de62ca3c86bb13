//! # User Service エラー定義
//!
//! User Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは [`roster_shared::ErrorResponse`]（RFC 9457 Problem Details）。

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use roster_domain::DomainError;
use roster_infra::{InfraError, InfraErrorKind};
use roster_shared::ErrorResponse;
use thiserror::Error;

/// `WWW-Authenticate` ヘッダーの値
pub const BASIC_CHALLENGE: &str = r#"Basic realm="roster""#;

/// User Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 対象のユーザーが存在しない
    #[error("{0}")]
    NotFound(String),

    /// リクエストの形式が不正
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// Basic 認証の失敗
    #[error("認証に失敗しました")]
    Unauthorized,
}

impl From<InfraError> for ServiceError {
    fn from(error: InfraError) -> Self {
        match error.kind() {
            InfraErrorKind::NotFound { .. } => Self::NotFound(error.to_string()),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ServiceError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ServiceError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::unauthorized("認証に失敗しました"),
            ),
        };

        let mut response = (status, Json(body)).into_response();

        if matches!(self, ServiceError::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_CHALLENGE),
            );
        }

        response
    }
}
