//! # メール配信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `EmailSender` trait でメール送信を抽象化
//! - **3 つの実装**: Resend（本番用 HTTP API）、SMTP（Mailpit 開発用）、Noop（テスト用）
//! - **環境変数切替**: `EMAIL_BACKEND` でランタイム選択
//! - **メッセージ ID**: 送信成功時はプロバイダ発行の ID を返す

mod noop;
mod resend;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopEmailSender;
pub use resend::ResendEmailSender;
pub use smtp::SmtpEmailSender;
use talentflow_domain::notification::{EmailMessage, MessageId, NotificationError};

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// Resend / SMTP / Noop の 3 実装を環境変数で切り替える。
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// メールを送信し、プロバイダが発行したメッセージ ID を返す
    async fn send_email(&self, email: &EmailMessage) -> Result<MessageId, NotificationError>;
}
