//! # 通知ユースケース
//!
//! 宛先解決 → テンプレートレンダリング → メール送信を統合する。

mod service;
mod template_renderer;

pub use service::{DispatchOutcome, NotificationService};
pub use template_renderer::TemplateRenderer;
