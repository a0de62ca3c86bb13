//! # ルーター構築
//!
//! ルート定義とミドルウェアの積み上げを行う。`main` と統合テストの両方から使用する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use roster_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        UserState,
        create_user,
        delete_user,
        get_user,
        health_check,
        list_users,
        login,
        update_user,
    },
    middleware::{BasicAuthState, canonical_log_line, require_basic_auth},
    usecase::UserUseCase,
};

/// アプリケーション全体のルーターを構築する
///
/// - `/health`, `/login`: 認証不要
/// - `/api/users/...`: Basic 認証必須
pub fn build_app(usecase: Arc<dyn UserUseCase>) -> Router {
    let user_state = Arc::new(UserState {
        usecase: usecase.clone(),
    });
    let auth_state = BasicAuthState { usecase };

    let api = Router::new()
        .route("/users", post(create_user))
        .route("/users/paginated", get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(from_fn_with_state(auth_state, require_basic_auth))
        .with_state(user_state);

    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(login))
        .nest("/api", api)
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. canonical_log_line: スパン内でサマリログを出力
        .layer(from_fn(canonical_log_line))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
