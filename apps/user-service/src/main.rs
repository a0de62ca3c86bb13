//! # User Service サーバー
//!
//! インメモリのユーザーストアを公開する HTTP API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 認証 |
//! |---------|------|------|
//! | GET | `/health` | 不要 |
//! | POST | `/login` | 不要 |
//! | POST | `/api/users` | Basic |
//! | GET | `/api/users/paginated?page=&pageSize=` | Basic |
//! | GET / PUT / DELETE | `/api/users/{id}` | Basic |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `USER_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `USER_SERVICE_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `SEED_DEMO_USERS` | No | デモユーザーの登録（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,roster=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p roster-user-service
//!
//! # 本番環境
//! USER_SERVICE_PORT=13010 LOG_FORMAT=json cargo run -p roster-user-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use roster_infra::repository::{InMemoryUserRepository, UserRepository};
use roster_shared::observability::TracingConfig;
use roster_user_service::{
    build_app,
    config::UserServiceConfig,
    usecase::{UserUseCaseImpl, seed_demo_users},
};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "user-service";

/// User Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    roster_shared::observability::init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    // 設定読み込み
    let config = UserServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    // 依存コンポーネントを初期化
    let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    if config.seed_demo_users {
        let count = seed_demo_users(user_repository.as_ref());
        tracing::info!(users = count, "デモユーザーを登録しました");
    }
    let user_usecase = Arc::new(UserUseCaseImpl::new(user_repository));

    let app = build_app(user_usecase);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}", config.bind_address()))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("ポートのバインドに失敗しました: {addr}"))?;
    tracing::info!("User Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
