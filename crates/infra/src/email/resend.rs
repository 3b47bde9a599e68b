//! Resend 通知送信実装
//!
//! Resend の HTTP API（`POST /emails`）を使用してメールを送信する。
//! 本番環境で使用する。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use talentflow_domain::notification::{EmailMessage, MessageId, NotificationError};

use super::EmailSender;

/// Resend 通知送信
///
/// `reqwest::Client` をラップし、Resend API でメールを送信する。
/// ベース URL は設定で差し替え可能（ステージング・テスト向け）。
pub struct ResendEmailSender {
    client:       reqwest::Client,
    base_url:     String,
    api_key:      String,
    from_address: String,
}

/// Resend API へのリクエストボディ
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:    &'a str,
    to:      [&'a str; 1],
    subject: &'a str,
    html:    &'a str,
    text:    &'a str,
}

/// Resend API のレスポンスボディ
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendEmailSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（例: `https://api.resend.com`）
    /// - `api_key`: Resend の API キー
    /// - `from_address`: 送信元メールアドレス（Resend でドメイン検証済みであること）
    pub fn new(base_url: &str, api_key: String, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<MessageId, NotificationError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendEmailRequest {
            from:    &self.from_address,
            to:      [&email.to],
            subject: &email.subject,
            html:    &email.html_body,
            text:    &email.text_body,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend リクエスト失敗: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::SendFailed(format!(
                "Resend API エラー {status}: {body}"
            )));
        }

        let body = response
            .json::<SendEmailResponse>()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend レスポンス不正: {e}")))?;

        Ok(MessageId::new(body.id))
    }
}
