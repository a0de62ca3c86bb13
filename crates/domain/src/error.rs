//! # ドメイン層エラー定義
//!
//! 外部から受け取った値をドメインの型に変換できなかった場合のエラー。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | パスの ID など入力値の解釈失敗 |
//!
//! ストア操作の「見つからない」はインフラ層の `InfraError` で表現する。
//! ストアの操作はそれ以外のエラーを返さない。
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::{DomainError, user::UserId};
//!
//! let result: Result<UserId, DomainError> = "abc".parse();
//! assert!(matches!(result, Err(DomainError::Validation(_))));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値をドメインの値オブジェクトに変換できない場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validationのメッセージに理由が含まれる() {
        let error = DomainError::Validation("ユーザー ID は数値である必要があります".to_string());

        assert_eq!(
            error.to_string(),
            "バリデーションエラー: ユーザー ID は数値である必要があります"
        );
    }
}
