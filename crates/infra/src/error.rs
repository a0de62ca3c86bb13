//! # インフラ層エラー定義
//!
//! ユーザーストアの操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! ストアの失敗は「更新・削除対象が存在しない」の 1 種類のみ。
//! 呼び出し元はこれを 404 に変換し、リトライはしない。

use std::fmt;

use derive_more::Display;
use roster_domain::user::UserId;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InfraErrorKind {
    /// 指定 ID のユーザーが存在しない
    ///
    /// 一度も作成されていない ID、または削除済みの ID を更新・削除しようとした場合。
    #[error("ユーザーが見つかりません: id={id}")]
    NotFound {
        /// 操作対象の ID
        id: UserId,
    },
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// ユーザー未存在エラーを生成する
    pub fn not_found(id: UserId) -> Self {
        Self {
            kind:       InfraErrorKind::NotFound { id },
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
