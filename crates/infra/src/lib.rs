//! # Roster インフラ層
//!
//! ユーザーレコードの保持を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **ユーザーストア**: プロセス内メモリにユーザーを保持し、並行アクセスを制御する
//! - **エラー定義**: ストア操作の失敗（対象が存在しない）を表現する
//!
//! ## 依存関係
//!
//! ```text
//! user-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use roster_domain::user::{Password, Username};
//! use roster_infra::repository::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.create(Username::new("user1"), Password::new("password1"));
//!
//! assert_eq!(user.id().as_u64(), 1);
//! assert!(repo.validate_credentials("user1", "password1"));
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
