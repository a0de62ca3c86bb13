//! # ミドルウェア
//!
//! - `basic_auth`: `/api` 配下の Basic 認証
//! - `canonical_log`: リクエスト完了時のサマリログ

pub mod basic_auth;
pub mod canonical_log;

pub use basic_auth::{BasicAuthState, BasicCredentials, require_basic_auth};
pub use canonical_log::canonical_log_line;
