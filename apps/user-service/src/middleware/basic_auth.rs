//! # Basic 認証ミドルウェア
//!
//! `Authorization: Basic base64(username:password)` をデコードし、
//! ユーザーストアの資格情報と照合する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = BasicAuthState { usecase: usecase.clone() };
//!
//! Router::new()
//!     .route("/api/users", post(create_user))
//!     .layer(from_fn_with_state(auth_state, require_basic_auth))
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::Engine as _;

use crate::{error::ServiceError, usecase::UserUseCase};

/// Basic 認証ミドルウェアの状態
#[derive(Clone)]
pub struct BasicAuthState {
    pub usecase: Arc<dyn UserUseCase>,
}

/// Basic 認証ヘッダーから取り出した資格情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// `Authorization` ヘッダーの値を解釈する
    ///
    /// スキームは大文字小文字を区別しない。パスワードは最初の `:` 以降すべて。
    /// 形式が不正な場合は `None`。
    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// リクエストヘッダーから資格情報を取り出す
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::parse)
    }
}

/// Basic 認証ミドルウェア
///
/// ヘッダーがない、形式が不正、または資格情報が一致しない場合は
/// 401 Unauthorized（`WWW-Authenticate: Basic realm="roster"`）を返す。
pub async fn require_basic_auth(
    State(state): State<BasicAuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(credentials) = BasicCredentials::from_headers(request.headers()) else {
        tracing::debug!("Basic 認証ヘッダーがないか、形式が不正です");
        return ServiceError::Unauthorized.into_response();
    };

    if !state
        .usecase
        .authenticate(&credentials.username, &credentials.password)
    {
        return ServiceError::Unauthorized.into_response();
    }

    next.run(request).await
}
