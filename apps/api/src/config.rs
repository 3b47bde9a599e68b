//! # API サービス設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// フロントエンド URL（メール内リンク用）
    pub base_url: String,
    /// メール配信設定
    pub email: EmailConfig,
    /// ユーザーディレクトリ設定
    pub directory: DirectoryConfig,
}

/// メール配信の設定
///
/// `EMAIL_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `resend`: Resend HTTP API 経由で送信（本番）
/// - `smtp`: Mailpit（開発）/ SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// 送信バックエンド（"resend" | "smtp" | "noop"）
    pub backend:         String,
    /// Resend API キー（backend=resend の場合に使用）
    pub resend_api_key:  String,
    /// Resend API のベース URL（ステージング・テスト向けに差し替え可能）
    pub resend_base_url: String,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:       String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:       u16,
    /// 送信元メールアドレス
    pub from_address:    String,
}

/// ユーザーディレクトリ（認証基盤の管理 API）の設定
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// ディレクトリ API のベース URL
    pub base_url:    String,
    /// 管理 API 用サービスキー
    pub service_key: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            base_url: env::var("NOTIFICATION_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            email: EmailConfig::from_env(),
            directory: DirectoryConfig::from_env(),
        })
    }
}

impl EmailConfig {
    /// 環境変数からメール配信設定を読み込む
    fn from_env() -> Self {
        Self {
            backend:         env::var("EMAIL_BACKEND").unwrap_or_else(|_| "noop".to_string()),
            resend_api_key:  env::var("RESEND_API_KEY").unwrap_or_default(),
            resend_base_url: env::var("RESEND_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            smtp_host:       env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port:       env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            from_address:    env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "noreply@talentflow.example.com".to_string()),
        }
    }
}

impl DirectoryConfig {
    /// 環境変数からディレクトリ設定を読み込む
    fn from_env() -> Self {
        Self {
            base_url:    env::var("DIRECTORY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9999".to_string()),
            service_key: env::var("DIRECTORY_SERVICE_KEY").unwrap_or_default(),
        }
    }
}
