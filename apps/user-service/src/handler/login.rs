//! # ログインハンドラ
//!
//! 認証不要のエンドポイント。資格情報は検証せず、固定メッセージを返す。
//! 実際の認証は `/api` 配下の Basic 認証ミドルウェアで行う。

/// POST /login
pub async fn login() -> &'static str {
    "Login successful!"
}
