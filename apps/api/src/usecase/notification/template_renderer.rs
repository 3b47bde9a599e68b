//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: 本文テンプレートはバイナリに埋め込まれる
//! - **件名もテンプレート**: 件名パターン `[TalentFlow] {種別ラベル}: {...}` を
//!   インラインテンプレートとして登録し、本文と同じ置換ルールで生成する
//! - **ペイロードをそのまま流し込む**: ペイロードの各フィールドを tera コンテキストに
//!   展開する。テンプレートが参照するフィールドが欠けている場合はレンダリングエラー
//! - **詳細リンク**: `{base_url}/...` をテンプレートに渡す

use serde_json::{Map, Value};
use talentflow_domain::notification::{EmailMessage, NotificationError, NotificationKind};
use tera::{Context, Tera};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、通知種別とペイロードから
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                // 件名テンプレート
                (
                    "new_message.subject",
                    "[TalentFlow] 新着メッセージ: {{ sender_name }}さんからメッセージが届きました",
                ),
                (
                    "job_application.subject",
                    "[TalentFlow] 新規応募: {{ job_title }}",
                ),
                (
                    "interview_scheduled.subject",
                    "[TalentFlow] 面接日程確定: {{ job_title }}",
                ),
                (
                    "assessment_passed.subject",
                    "[TalentFlow] アセスメント合格: {{ assessment_name }}",
                ),
                // 本文テンプレート
                (
                    "new_message.html",
                    include_str!("../../../templates/notifications/new_message.html"),
                ),
                (
                    "new_message.txt",
                    include_str!("../../../templates/notifications/new_message.txt"),
                ),
                (
                    "job_application.html",
                    include_str!("../../../templates/notifications/job_application.html"),
                ),
                (
                    "job_application.txt",
                    include_str!("../../../templates/notifications/job_application.txt"),
                ),
                (
                    "interview_scheduled.html",
                    include_str!("../../../templates/notifications/interview_scheduled.html"),
                ),
                (
                    "interview_scheduled.txt",
                    include_str!("../../../templates/notifications/interview_scheduled.txt"),
                ),
                (
                    "assessment_passed.html",
                    include_str!("../../../templates/notifications/assessment_passed.html"),
                ),
                (
                    "assessment_passed.txt",
                    include_str!("../../../templates/notifications/assessment_passed.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知種別とペイロードからメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `kind`: 通知種別（テンプレートの選択に使用）
    /// - `payload`: テンプレートに流し込むフィールド
    /// - `to`: 送信先メールアドレス
    /// - `base_url`: アプリケーションのベース URL（例: `http://localhost:5173`）
    pub fn render(
        &self,
        kind: NotificationKind,
        payload: &Map<String, Value>,
        to: &str,
        base_url: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("base_url", base_url);
        for (key, value) in payload {
            context.insert(key.as_str(), value);
        }

        let template_name: &str = kind.into();

        let subject = self
            .engine
            .render(&format!("{template_name}.subject"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: to.to_string(),
            subject,
            html_body,
            text_body,
        })
    }
}
