//! # 通知サービス
//!
//! 宛先解決 → テンプレートレンダリング → メール送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **宛先の二形態**: メールアドレス直接指定はそのまま使い、ユーザー ID 指定は
//!   ディレクトリで解決する
//! - **照会失敗は宛先なし扱い**: ディレクトリのエラー・未登録はいずれも
//!   「宛先なし」として正常終了する（エラーにしない）
//! - **配信失敗はエラー**: メール送信の失敗は呼び出し元にエラーとして伝播する
//! - **依存性注入**: `EmailSender` と `UserDirectory` は trait で抽象化
//! - **逐次・単発**: 1 リクエストにつきディレクトリ照会は最大 1 回、
//!   送信は最大 1 回。リトライしない

use std::sync::Arc;

use talentflow_domain::{
    notification::{MessageId, NotificationRequest},
    user::Email,
};
use talentflow_infra::{EmailSender, UserDirectory};
use talentflow_shared::{event_log::event, log_business_event};

use super::TemplateRenderer;
use crate::error::ApiError;

/// 通知ディスパッチの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// 送信完了（配信プロバイダのメッセージ ID 付き）
    Sent(MessageId),
    /// 宛先メールアドレスが解決できなかった（正常終了、送信なし）
    NoRecipient,
}

/// 通知サービス
///
/// 通知リクエスト 1 件のディスパッチフローを統合する。
pub struct NotificationService {
    sender:            Arc<dyn EmailSender>,
    directory:         Arc<dyn UserDirectory>,
    template_renderer: TemplateRenderer,
    base_url:          String,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        directory: Arc<dyn UserDirectory>,
        template_renderer: TemplateRenderer,
        base_url: String,
    ) -> Self {
        Self {
            sender,
            directory,
            template_renderer,
            base_url,
        }
    }

    /// 通知をディスパッチする
    ///
    /// 1. 宛先解決: 直接指定のメールアドレス、なければディレクトリ照会
    /// 2. テンプレートレンダリング
    /// 3. メール送信
    ///
    /// 宛先が解決できない場合は [`DispatchOutcome::NoRecipient`] を返す
    /// （送信せず正常終了）。配信失敗は [`ApiError::Delivery`] として伝播する。
    pub async fn dispatch(&self, request: NotificationRequest) -> Result<DispatchOutcome, ApiError> {
        let kind: &str = request.kind().into();

        // 宛先解決
        let Some(recipient_email) = self.resolve_recipient(&request).await else {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_SKIPPED,
                event.result = event::result::SKIPPED,
                notification.kind = kind,
                "宛先メールアドレスが解決できず通知をスキップ"
            );
            return Ok(DispatchOutcome::NoRecipient);
        };

        // テンプレートレンダリング
        // 参照フィールドの欠落はクライアント入力の問題なので 400 に写す
        let email = self
            .template_renderer
            .render(
                request.kind(),
                request.payload(),
                recipient_email.as_str(),
                &self.base_url,
            )
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        // メール送信
        match self.sender.send_email(&email).await {
            Ok(message_id) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.result = event::result::SUCCESS,
                    notification.kind = kind,
                    notification.recipient = %email.to,
                    notification.message_id = %message_id,
                    "通知メール送信成功"
                );
                Ok(DispatchOutcome::Sent(message_id))
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.result = event::result::FAILURE,
                    notification.kind = kind,
                    notification.recipient = %email.to,
                    error = %e,
                    "通知メール送信失敗"
                );
                Err(ApiError::Delivery(e.to_string()))
            }
        }
    }

    /// 宛先メールアドレスを解決する
    ///
    /// 直接指定があればそれを使い、なければユーザー ID でディレクトリを照会する。
    /// 照会エラーは警告ログを出して `None`（宛先なし）として扱う。
    async fn resolve_recipient(&self, request: &NotificationRequest) -> Option<Email> {
        if let Some(email) = request.recipient().email() {
            return Some(email.clone());
        }

        let user_id = request.recipient().user_id()?;

        match self.directory.find_email(user_id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    "ユーザーディレクトリ照会に失敗（宛先なしとして処理）"
                );
                None
            }
        }
    }
}
