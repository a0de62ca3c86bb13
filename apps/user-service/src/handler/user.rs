//! # ユーザーハンドラ
//!
//! ユーザー CRUD のエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/users` - ユーザー作成
//! - `GET /api/users/paginated?page=&pageSize=` - ユーザー一覧（ID 昇順）
//! - `GET /api/users/{id}` - ユーザー取得
//! - `PUT /api/users/{id}` - ユーザー置き換え
//! - `DELETE /api/users/{id}` - ユーザー削除
//!
//! ストア操作はリクエストを処理するタスク内で同期的に完了し、
//! その戻り値からレスポンスを組み立てる。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use roster_domain::{
    pagination::Pagination,
    user::{Password, User, UserId, Username},
};
use serde::{Deserialize, Serialize};

use super::ValidatedJson;
use crate::{error::ServiceError, usecase::UserUseCase};

/// ユーザーハンドラの共有状態
pub struct UserState {
    pub usecase: Arc<dyn UserUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー作成・更新リクエスト
///
/// ボディに `id` が含まれていても無視する（ID はストアが決める）。
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub password: String,
}

/// 一覧取得のクエリパラメータ
///
/// 不正な値をデフォルト値として扱うため、文字列のまま受け取る。
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page:      Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// ユーザーレスポンス
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id:       UserId,
    pub username: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let (id, username, password) = user.into_parts();
        Self {
            id,
            username: username.into_string(),
            password: password.into_string(),
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ServiceError> {
    raw.parse::<UserId>().map_err(ServiceError::from)
}

// --- ハンドラ ---

/// POST /api/users
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> impl IntoResponse {
    let user = state
        .usecase
        .create_user(Username::new(req.username), Password::new(req.password));

    (StatusCode::CREATED, Json(UserResponse::from(user)))
}

/// GET /api/users/paginated
pub async fn list_users(
    State(state): State<Arc<UserState>>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    let pagination = Pagination::from_query(query.page.as_deref(), query.page_size.as_deref());
    let users: Vec<UserResponse> = state
        .usecase
        .list_users(pagination)
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Json(users)
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = parse_user_id(&id)?;
    let user = state.usecase.get_user(id)?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
///
/// レコード全体を置き換え、保存したレコードを返す。
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = parse_user_id(&id)?;
    let user = state.usecase.update_user(
        id,
        Username::new(req.username),
        Password::new(req.password),
    )?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = parse_user_id(&id)?;
    state.usecase.delete_user(id)?;

    Ok(StatusCode::OK)
}
