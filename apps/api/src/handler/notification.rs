//! # 通知ハンドラ
//!
//! 通知ディスパッチ API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/notifications` - 通知メールを送信する
//!
//! ## リクエスト/レスポンス
//!
//! リクエストは `{type, to?, toUserId?, data}`。`to`（メールアドレス直接指定）と
//! `toUserId`（ディレクトリで解決）の少なくとも一方が必要。
//!
//! - 送信成功: `{"success": true, "id": "<プロバイダのメッセージ ID>"}`
//! - 宛先解決不能: `{"success": false, "reason": "no_email"}`（200、エラーではない）
//! - 不正リクエスト: 400 `{"error": メッセージ}`
//! - 配信失敗: 500 `{"error": メッセージ}`

use std::{str::FromStr, sync::Arc};

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use talentflow_domain::{
    notification::{NotificationKind, NotificationRequest, Recipient},
    user::{Email, UserId},
};

use crate::{
    error::ApiError,
    usecase::{DispatchOutcome, NotificationService},
};

/// 通知 API の共有状態
pub struct NotificationState {
    pub service: NotificationService,
}

// --- リクエスト/レスポンス型 ---

/// 通知送信リクエスト
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    /// 通知種別（snake_case 文字列）
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// 宛先メールアドレス（直接指定）
    pub to: Option<String>,
    /// 宛先ユーザー ID（ディレクトリで解決）
    #[serde(rename = "toUserId")]
    pub to_user_id: Option<String>,
    /// テンプレートペイロード
    pub data: Option<Map<String, Value>>,
}

/// 通知送信レスポンス
#[derive(Debug, Serialize)]
pub struct SendNotificationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 通知メールを送信する
///
/// `POST /api/v1/notifications`
pub async fn send_notification(
    State(state): State<Arc<NotificationState>>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<SendNotificationResponse>, ApiError> {
    let Some(kind_value) = request.kind else {
        return Err(ApiError::BadRequest("type が指定されていません".to_string()));
    };
    let kind = NotificationKind::from_str(&kind_value)
        .map_err(|_| ApiError::BadRequest(format!("未知の通知種別です: {kind_value}")))?;

    let email = request.to.map(Email::new).transpose()?;
    let user_id = request
        .to_user_id
        .as_deref()
        .map(UserId::parse)
        .transpose()?;
    let recipient = Recipient::new(email, user_id)?;

    let Some(payload) = request.data else {
        return Err(ApiError::BadRequest("data が指定されていません".to_string()));
    };

    let outcome = state
        .service
        .dispatch(NotificationRequest::new(kind, recipient, payload))
        .await?;

    let response = match outcome {
        DispatchOutcome::Sent(message_id) => SendNotificationResponse {
            success: true,
            id:      Some(message_id.into_string()),
            reason:  None,
        },
        DispatchOutcome::NoRecipient => SendNotificationResponse {
            success: false,
            id:      None,
            reason:  Some("no_email".to_string()),
        },
    };

    Ok(Json(response))
}
