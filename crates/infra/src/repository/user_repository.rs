//! # UserRepository
//!
//! ユーザーレコードをプロセス内メモリに保持するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一の読み書きロック**: ユーザーのマップと採番カウンターを 1 つの
//!   `RwLock` で保護する。参照系は共有ロック、更新系は排他ロックを取る
//! - **専用カウンターによる採番**: ID はマップの件数ではなくカウンターから払い出す。
//!   削除後も ID は再利用されない
//! - **ID 昇順の列挙**: `BTreeMap` で保持し、ページングの結果を決定的にする
//! - **短いクリティカルセクション**: ロックはマップとカウンターの操作中のみ保持し、
//!   ガードを呼び出し元へ返さない
//!
//! ## ロックの汚染
//!
//! 各クリティカルセクションはマップとカウンターを常に整合した状態で抜けるため、
//! 別スレッドのパニックで汚染されたロックはそのまま回復して使用する。

use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use roster_domain::{
    pagination::Pagination,
    user::{Password, User, UserId, Username},
};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザーレコードの CRUD と資格情報の照合を定義する。
/// すべての操作は同期的に完了し、競合はブロッキングで解決する。
pub trait UserRepository: Send + Sync {
    /// ユーザーを作成する
    ///
    /// これまでに払い出したどの ID よりも大きい ID を採番して登録し、
    /// 登録したレコードを返す。失敗しない。
    fn create(&self, username: Username, password: Password) -> User;

    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Some(user)`: ユーザーが見つかった場合
    /// - `None`: ユーザーが見つからない場合
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// ID 昇順でユーザー一覧を取得する
    ///
    /// 範囲外のページは空の Vec を返す。
    fn list(&self, pagination: Pagination) -> Vec<User>;

    /// ユーザーを置き換える
    ///
    /// `user` の内容でレコード全体を置き換える。ID はストア側の `id` を正とし、
    /// `user` が持つ ID は無視する。
    ///
    /// # エラー
    ///
    /// - `InfraErrorKind::NotFound`: `id` のユーザーが存在しない（ストアは変更されない）
    fn update(&self, id: UserId, user: User) -> Result<(), InfraError>;

    /// ユーザーを削除する
    ///
    /// # エラー
    ///
    /// - `InfraErrorKind::NotFound`: `id` のユーザーが存在しない（ストアは変更されない）
    fn delete(&self, id: UserId) -> Result<(), InfraError>;

    /// ユーザー名とパスワードが完全一致するユーザーが存在するか
    ///
    /// 全件を線形に走査する。比較は定数時間ではない。
    fn validate_credentials(&self, username: &str, password: &str) -> bool;

    /// 登録件数を取得する
    fn count(&self) -> usize;
}

/// ロックで保護される状態
#[derive(Debug)]
struct UserTable {
    users:   BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users:   BTreeMap::new(),
            next_id: UserId::new(1),
        }
    }
}

/// インメモリ実装の UserRepository
///
/// プロセスの生存期間中のみデータを保持する。
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// 空のリポジトリを作成する
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, UserTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, username: Username, password: Password) -> User {
        let mut table = self.write();

        // next_id は u64::MAX で飽和する。そこまで採番することはない前提で、
        // 到達した場合に既存レコードを上書きしないことだけ検査する
        let id = table.next_id;
        debug_assert!(
            !table.users.contains_key(&id),
            "ユーザー ID を使い切りました: id={id}"
        );
        table.next_id = id.next();

        let user = User::new(id, username, password);
        table.users.insert(id, user.clone());
        user
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn list(&self, pagination: Pagination) -> Vec<User> {
        self.read()
            .users
            .values()
            .skip(pagination.offset())
            .take(pagination.limit())
            .cloned()
            .collect()
    }

    fn update(&self, id: UserId, user: User) -> Result<(), InfraError> {
        let mut table = self.write();

        let Some(stored) = table.users.get_mut(&id) else {
            return Err(InfraError::not_found(id));
        };
        *stored = user.with_id(id);
        Ok(())
    }

    fn delete(&self, id: UserId) -> Result<(), InfraError> {
        self.write()
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| InfraError::not_found(id))
    }

    fn validate_credentials(&self, username: &str, password: &str) -> bool {
        self.read()
            .users
            .values()
            .any(|user| user.matches_credentials(username, password))
    }

    fn count(&self) -> usize {
        self.read().users.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::InfraErrorKind;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryUserRepository>();
        assert_send_sync::<Box<dyn UserRepository>>();
    }

    /// user1, user2 を登録済みのリポジトリ
    #[fixture]
    fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.create(Username::new("user1"), Password::new("password1"));
        repo.create(Username::new("user2"), Password::new("password2"));
        repo
    }

    fn ids(users: &[User]) -> Vec<u64> {
        users.iter().map(|u| u.id().as_u64()).collect()
    }

    // ===== create =====

    #[test]
    fn test_最初に採番されるidは1() {
        let sut = InMemoryUserRepository::new();

        let user = sut.create(Username::new("user1"), Password::new("password1"));

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.username().as_str(), "user1");
        assert_eq!(user.password().as_str(), "password1");
    }

    #[rstest]
    fn test_削除後もidは再利用されない(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(1)).unwrap();

        let user = seeded.create(Username::new("user3"), Password::new("password3"));

        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(seeded.count(), 2);
    }

    #[rstest]
    fn test_末尾のidを削除しても次のidは大きくなる(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(2)).unwrap();

        let user = seeded.create(Username::new("user3"), Password::new("password3"));

        assert_eq!(user.id(), UserId::new(3));
    }

    // ===== find_by_id =====

    #[rstest]
    fn test_作成したユーザーをidで取得できる(seeded: InMemoryUserRepository) {
        let user = seeded.find_by_id(UserId::new(1)).unwrap();

        assert_eq!(
            user,
            User::new(UserId::new(1), Username::new("user1"), Password::new("password1"))
        );
    }

    #[rstest]
    fn test_存在しないidはnoneを返す(seeded: InMemoryUserRepository) {
        assert!(seeded.find_by_id(UserId::new(99)).is_none());
    }

    // ===== list =====

    #[test]
    fn test_空のストアの一覧は空() {
        let sut = InMemoryUserRepository::new();

        assert!(sut.list(Pagination::default()).is_empty());
    }

    #[rstest]
    #[case(1, 10, vec![1, 2, 3, 4, 5])]
    #[case(1, 2, vec![1, 2])]
    #[case(2, 2, vec![3, 4])]
    #[case(3, 2, vec![5])]
    #[case(4, 2, vec![])]
    #[case(100, 100, vec![])]
    #[case(0, 0, vec![1, 2, 3, 4, 5])]
    #[case(i64::MAX, i64::MAX, vec![])]
    fn test_一覧はid昇順でページングされる(
        #[case] page: i64,
        #[case] page_size: i64,
        #[case] expected: Vec<u64>,
    ) {
        let sut = InMemoryUserRepository::new();
        for i in 1..=5 {
            sut.create(Username::new(format!("user{i}")), Password::new("pw"));
        }

        let users = sut.list(Pagination::new(page, page_size));

        assert_eq!(ids(&users), expected);
    }

    #[rstest]
    fn test_削除されたユーザーは一覧に含まれない(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(1)).unwrap();

        assert_eq!(ids(&seeded.list(Pagination::default())), vec![2]);
    }

    // ===== update =====

    #[rstest]
    fn test_更新はレコード全体を置き換える(seeded: InMemoryUserRepository) {
        let input = User::new(UserId::new(1), Username::new("alice"), Password::new("secret"));

        seeded.update(UserId::new(1), input.clone()).unwrap();

        assert_eq!(seeded.find_by_id(UserId::new(1)), Some(input));
    }

    #[rstest]
    fn test_更新時は入力のidを無視してストアのidを保持する(
        seeded: InMemoryUserRepository,
    ) {
        let input = User::new(UserId::new(2), Username::new("alice"), Password::new("password1"));

        seeded.update(UserId::new(1), input).unwrap();

        let updated = seeded.find_by_id(UserId::new(1)).unwrap();
        assert_eq!(updated.id(), UserId::new(1));
        assert_eq!(updated.username().as_str(), "alice");
        // id=2 のレコードは影響を受けない
        let untouched = seeded.find_by_id(UserId::new(2)).unwrap();
        assert_eq!(untouched.username().as_str(), "user2");
    }

    #[rstest]
    fn test_存在しないidの更新はnot_foundでストアは変わらない(
        seeded: InMemoryUserRepository,
    ) {
        let before = seeded.list(Pagination::default());
        let input = User::new(UserId::new(9), Username::new("ghost"), Password::new("x"));

        let err = seeded.update(UserId::new(9), input).unwrap_err();

        assert_eq!(
            err.kind(),
            &InfraErrorKind::NotFound {
                id: UserId::new(9),
            }
        );
        assert_eq!(seeded.list(Pagination::default()), before);
    }

    // ===== delete =====

    #[rstest]
    fn test_削除したユーザーは取得できない(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(2)).unwrap();

        assert!(seeded.find_by_id(UserId::new(2)).is_none());
        assert_eq!(seeded.count(), 1);
    }

    #[rstest]
    fn test_削除済みidの再削除はnot_found(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(2)).unwrap();

        let err = seeded.delete(UserId::new(2)).unwrap_err();

        assert_eq!(err.kind(), &InfraErrorKind::NotFound { id: UserId::new(2) });
        assert_eq!(seeded.count(), 1);
    }

    #[rstest]
    fn test_削除済みidの更新はnot_found(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(1)).unwrap();
        let input = User::new(UserId::new(1), Username::new("alice"), Password::new("x"));

        let err = seeded.update(UserId::new(1), input).unwrap_err();

        assert_eq!(err.kind(), &InfraErrorKind::NotFound { id: UserId::new(1) });
        assert!(seeded.find_by_id(UserId::new(1)).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ユーザー ID を使い切りました")]
    fn test_id上限到達後の作成は既存レコードを上書きせずに検出される() {
        let repo = InMemoryUserRepository {
            table: RwLock::new(UserTable {
                users:   BTreeMap::new(),
                next_id: UserId::new(u64::MAX),
            }),
        };
        let last = repo.create(Username::new("last"), Password::new("pw"));
        assert_eq!(last.id(), UserId::new(u64::MAX));

        repo.create(Username::new("overflow"), Password::new("pw"));
    }

    // ===== validate_credentials =====

    #[rstest]
    #[case("user1", "password1", true)]
    #[case("user2", "password2", true)]
    #[case("user1", "password2", false)]
    #[case("unknown", "password1", false)]
    #[case("", "", false)]
    fn test_資格情報は登録済みの組み合わせのみ有効(
        seeded: InMemoryUserRepository,
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(seeded.validate_credentials(username, password), expected);
    }

    #[rstest]
    fn test_削除後は資格情報が無効になる(seeded: InMemoryUserRepository) {
        seeded.delete(UserId::new(1)).unwrap();

        assert!(!seeded.validate_credentials("user1", "password1"));
    }

    #[rstest]
    fn test_更新後は新しい資格情報のみ有効(seeded: InMemoryUserRepository) {
        let input = User::new(UserId::new(1), Username::new("alice"), Password::new("password1"));
        seeded.update(UserId::new(1), input).unwrap();

        assert!(seeded.validate_credentials("alice", "password1"));
        assert!(!seeded.validate_credentials("user1", "password1"));
    }

    // ===== ロックの汚染 =====

    #[test]
    fn test_汚染されたロックでも操作を継続できる() {
        let sut = InMemoryUserRepository::new();
        sut.create(Username::new("user1"), Password::new("password1"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = sut.table.write().unwrap();
            panic!("クリティカルセクション内のパニック");
        }));
        assert!(result.is_err());
        assert!(sut.table.is_poisoned());

        let user = sut.create(Username::new("user2"), Password::new("password2"));
        assert_eq!(user.id(), UserId::new(2));
        assert!(sut.validate_credentials("user1", "password1"));
    }
}
