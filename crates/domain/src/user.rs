//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`User`] | ユーザー（レコード） | ストアが保持する 1 件のユーザー |
//! | [`UserId`] | ユーザー ID | ストアが採番する主キー |
//! | [`Username`] | ユーザー名 | Basic 認証のユーザー名 |
//! | [`Password`] | パスワード | Basic 認証のパスワード（平文） |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID と資格情報をラップし、引数の取り違えを型で防ぐ
//! - **ID の不変性**: ID はストアが採番し、レコードの置き換えでも変わらない
//! - **平文パスワード**: パスワードはハッシュ化せずに保持する。
//!   Debug 出力ではマスクする

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// ユーザー ID（一意識別子）
///
/// ストアが 1 から単調増加で採番する。削除された ID は再利用されない。
/// JSON では数値としてそのまま表現する。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(u64);

impl UserId {
    /// 数値からユーザー ID を作成する
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// 内部の数値を取得する
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// 次の ID を返す
    ///
    /// u64 の上限に達した場合は上限値のまま返す。
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// パスパラメータなどの文字列からユーザー ID を解釈する
///
/// 数字のみで構成された文字列を受け付ける（`+` 記号や空白は不可）。
impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Validation(format!(
                "ユーザー ID は数値である必要があります: {s:?}"
            )));
        }

        s.parse::<u64>().map(Self).map_err(|_| {
            DomainError::Validation(format!("ユーザー ID が範囲外です: {s}"))
        })
    }
}

/// ユーザー名（値オブジェクト）
///
/// 形式の検証は行わない。空文字列も保持できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Username(String);

impl Username {
    /// ユーザー名を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// パスワード（平文）
///
/// ハッシュ化せずにそのまま保持し、認証時は完全一致で比較する。
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。
/// `Display` は実装しない。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// パスワードを作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// ユーザーエンティティ
///
/// ストアに保持される 1 件のレコード。
///
/// # 不変条件
///
/// - `id` はストアが採番した値であり、ストア内で一意
/// - ストアのキーと `id` は常に一致する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:       UserId,
    username: Username,
    password: Password,
}

impl User {
    /// ユーザーを作成する
    pub fn new(id: UserId, username: Username, password: Password) -> Self {
        Self {
            id,
            username,
            password,
        }
    }

    /// ID を差し替えたレコードを返す
    ///
    /// 更新時にストア側の ID を正とするために使用する。
    #[must_use]
    pub fn with_id(self, id: UserId) -> Self {
        Self { id, ..self }
    }

    /// ユーザー名とパスワードが完全一致するか
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username.as_str() == username && self.password.as_str() == password
    }

    /// ID・ユーザー名・パスワードに分解する
    pub fn into_parts(self) -> (UserId, Username, Password) {
        (self.id, self.username, self.password)
    }

    // Getter メソッド

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
