//! # ユーザーユースケース
//!
//! ユーザーの CRUD と Basic 認証の照合を実装する。
//!
//! ストア操作は同期的に完了する。ハンドラはその戻り値からレスポンスを組み立て、
//! 別タスクへ処理を切り離さない。

use std::sync::Arc;

use roster_domain::{
    pagination::Pagination,
    user::{Password, User, UserId, Username},
};
use roster_infra::{InfraError, repository::UserRepository};

use crate::error::ServiceError;

/// 起動時に登録するデモユーザー
pub const DEMO_USERS: [(&str, &str); 2] = [("user1", "password1"), ("user2", "password2")];

/// ユーザーユースケースの実装
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを作成する
    pub fn create_user(&self, username: Username, password: Password) -> User {
        let user = self.user_repository.create(username, password);
        tracing::info!(user.id = %user.id(), "ユーザーを作成しました");
        user
    }

    /// ID でユーザーを取得する
    pub fn get_user(&self, id: UserId) -> Result<User, ServiceError> {
        tracing::debug!(user.id = %id, "ユーザーを取得します");
        self.user_repository
            .find_by_id(id)
            .ok_or_else(|| InfraError::not_found(id).into())
    }

    /// ID 昇順でユーザー一覧を取得する
    pub fn list_users(&self, pagination: Pagination) -> Vec<User> {
        let users = self.user_repository.list(pagination);
        tracing::debug!(
            page = pagination.page(),
            page_size = pagination.page_size(),
            returned = users.len(),
            "ユーザー一覧を取得しました"
        );
        users
    }

    /// ユーザーを置き換え、保存したレコードを返す
    pub fn update_user(
        &self,
        id: UserId,
        username: Username,
        password: Password,
    ) -> Result<User, ServiceError> {
        let user = User::new(id, username, password);
        self.user_repository.update(id, user.clone())?;
        tracing::info!(user.id = %id, "ユーザーを更新しました");
        Ok(user)
    }

    /// ユーザーを削除する
    pub fn delete_user(&self, id: UserId) -> Result<(), ServiceError> {
        self.user_repository.delete(id)?;
        tracing::info!(user.id = %id, "ユーザーを削除しました");
        Ok(())
    }

    /// Basic 認証の資格情報を照合する
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let authenticated = self.user_repository.validate_credentials(username, password);
        if !authenticated {
            tracing::debug!(username, "資格情報が一致しません");
        }
        authenticated
    }
}

/// デモユーザーを登録し、登録後の件数を返す
pub fn seed_demo_users(repository: &dyn UserRepository) -> usize {
    for (username, password) in DEMO_USERS {
        repository.create(Username::new(username), Password::new(password));
    }
    repository.count()
}
