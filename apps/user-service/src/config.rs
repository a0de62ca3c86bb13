//! # User Service 設定
//!
//! 環境変数から User Service サーバーの設定を読み込む。
//!
//! 読み込み処理は変数名から値を引く関数を受け取る純粋関数として実装し、
//! テストではプロセスの環境変数を書き換えずに検証する。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("USER_SERVICE_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),

    /// 真偽値として解釈できない
    #[error("{name} は true または false である必要があります: {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// User Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// 起動時にデモユーザー（user1, user2）を登録するか
    pub seed_demo_users: bool,
}

impl UserServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 変数名から値を引く関数を使って設定を読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("USER_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("USER_SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let seed_demo_users = match lookup("SEED_DEMO_USERS") {
            Some(raw) => parse_bool("SEED_DEMO_USERS", raw)?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            seed_demo_users,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(name: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value: raw }),
    }
}
