//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `login`: ログイン（固定メッセージ）
//! - `user`: ユーザー CRUD

pub mod extract;
pub mod health;
pub mod login;
pub mod user;

pub use extract::ValidatedJson;
pub use health::health_check;
pub use login::login;
pub use user::{UserState, create_user, delete_user, get_user, list_users, update_user};
