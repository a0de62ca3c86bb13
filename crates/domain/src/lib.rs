//! # Roster ドメイン層
//!
//! ユーザー管理サービスの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`user::User`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`user::UserId`],
//!   [`pagination::Pagination`]）
//! - **ドメインエラー**: 入力値の解釈に失敗したことを表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! user-service → infra → domain
//! ```
//!
//! ドメイン層はストアの実装（ロック、コレクション）にも HTTP にも依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティと ID・資格情報の値オブジェクト
//! - [`pagination`] - 一覧取得のページ指定
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::user::{Password, User, UserId, Username};
//!
//! let user = User::new(UserId::new(1), Username::new("user1"), Password::new("password1"));
//! assert_eq!(user.id().as_u64(), 1);
//! ```

pub mod error;
pub mod pagination;
pub mod user;

pub use error::DomainError;
