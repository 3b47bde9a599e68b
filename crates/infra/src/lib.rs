//! # TalentFlow インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール配信**: 配信プロバイダ（Resend / SMTP / Noop）への送信
//! - **ユーザーディレクトリ**: 認証基盤のユーザー照会 API クライアント
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`email`] - メール配信バックエンド
//! - [`directory`] - ユーザーディレクトリクライアント
//! - [`mock`] - テスト用モック実装（`test-utils` feature）

pub mod directory;
pub mod email;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use directory::{DirectoryError, HttpUserDirectory, UserDirectory};
pub use email::{EmailSender, NoopEmailSender, ResendEmailSender, SmtpEmailSender};
