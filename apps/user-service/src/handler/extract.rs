//! # リクエスト抽出器
//!
//! JSON ボディのデコード失敗を 400 Bad Request（Problem Details）に変換する。
//! axum 標準の `Json` はデコード失敗を 422 やプレーンテキストで返すため、
//! エラーレスポンスの形式を揃える目的でラップする。

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

/// デコード失敗を [`ServiceError::BadRequest`] にする JSON 抽出器
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
