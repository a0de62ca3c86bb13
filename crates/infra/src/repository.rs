//! # リポジトリ
//!
//! ユーザーレコードを保持するリポジトリのトレイトと実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由の注入**: ハンドラ・ユースケースは `Arc<dyn UserRepository>` を受け取る
//! - **同期インターフェース**: ストア操作は短いクリティカルセクションで完結し、
//!   `.await` を含まない
//! - **テスタビリティ**: テストごとに新しいストアを生成できる（グローバル状態を持たない）

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};
