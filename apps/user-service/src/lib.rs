//! # Roster User Service
//!
//! インメモリのユーザーストアに対する CRUD を、Basic 認証付きの HTTP API として提供する。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - サービスエラーと HTTP レスポンスへの変換
//! - [`usecase`] - ビジネスロジック
//! - [`handler`] - HTTP ハンドラ
//! - [`middleware`] - Basic 認証、Canonical Log Line
//! - [`app_builder`] - ルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;

pub use app_builder::build_app;
