//! # ユースケース層
//!
//! User Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようにする
//! - **依存性注入**: リポジトリを外部から注入
//! - **同期呼び出し**: ストアは await を挟まずに完了するため、トレイトも同期的に定義する

pub mod user;

use roster_domain::{
    pagination::Pagination,
    user::{Password, User, UserId, Username},
};
pub use user::{DEMO_USERS, UserUseCaseImpl, seed_demo_users};

use crate::error::ServiceError;

/// ユーザーユースケーストレイト
///
/// 具体的な実装は `UserUseCaseImpl` で提供される。
pub trait UserUseCase: Send + Sync {
    /// ユーザーを作成する
    fn create_user(&self, username: Username, password: Password) -> User;

    /// ID でユーザーを取得する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(User)`: 取得したユーザー
    /// - `Err(ServiceError::NotFound)`: ユーザーが存在しない
    fn get_user(&self, id: UserId) -> Result<User, ServiceError>;

    /// ユーザー一覧を取得する
    fn list_users(&self, pagination: Pagination) -> Vec<User>;

    /// ユーザーを置き換える
    ///
    /// ## 戻り値
    ///
    /// - `Ok(User)`: 保存したレコード（ID はパスの `id`）
    /// - `Err(ServiceError::NotFound)`: ユーザーが存在しない
    fn update_user(
        &self,
        id: UserId,
        username: Username,
        password: Password,
    ) -> Result<User, ServiceError>;

    /// ユーザーを削除する
    fn delete_user(&self, id: UserId) -> Result<(), ServiceError>;

    /// Basic 認証の資格情報を照合する
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// UserUseCaseImpl に UserUseCase トレイトを実装
impl UserUseCase for UserUseCaseImpl {
    fn create_user(&self, username: Username, password: Password) -> User {
        self.create_user(username, password)
    }

    fn get_user(&self, id: UserId) -> Result<User, ServiceError> {
        self.get_user(id)
    }

    fn list_users(&self, pagination: Pagination) -> Vec<User> {
        self.list_users(pagination)
    }

    fn update_user(
        &self,
        id: UserId,
        username: Username,
        password: Password,
    ) -> Result<User, ServiceError> {
        self.update_user(id, username, password)
    }

    fn delete_user(&self, id: UserId) -> Result<(), ServiceError> {
        self.delete_user(id)
    }

    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.authenticate(username, password)
    }
}
