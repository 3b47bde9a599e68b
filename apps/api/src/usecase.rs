//! # ユースケース層
//!
//! ハンドラから呼び出されるビジネスロジックを定義する。
//!
//! ## 設計方針
//!
//! - 外部コラボレータ（メール配信、ユーザーディレクトリ）は trait で抽象化し、
//!   `Arc<dyn …>` で注入する
//! - ハンドラは薄く保ち、処理の編成はこの層に置く

pub mod notification;

pub use notification::{DispatchOutcome, NotificationService, TemplateRenderer};
