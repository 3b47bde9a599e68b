//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 |
//! |---|------------|
//! | [`NotificationKind`] | 通知種別（4 種類: 新着メッセージ、新規応募、面接日程確定、アセスメント合格） |
//! | [`NotificationRequest`] | 通知リクエスト（種別 + 宛先 + ペイロード） |
//! | [`EmailMessage`] | テンプレートレンダリングの出力 |
//! | [`MessageId`] | 配信プロバイダが発行するメッセージ ID |
//!
//! ## 設計方針
//!
//! - **enum による通知種別**: 各バリアントがメールテンプレートに対応
//! - **宛先の二形態**: メールアドレス直接指定とユーザー ID 指定（ディレクトリで解決）
//! - **テンプレート分離**: 通知種別とメール生成は分離（TemplateRenderer は api）

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::{
    DomainError,
    user::{Email, UserId},
};

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 通知種別
///
/// リクエストの `type` フィールドに格納される値。
/// snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    /// 新着メッセージ: 他ユーザーからメッセージが届いたとき
    NewMessage,
    /// 新規応募: 求人に応募が入ったとき → 求人オーナーに送信
    JobApplication,
    /// 面接日程確定: 面接がスケジュールされたとき → 候補者に送信
    InterviewScheduled,
    /// アセスメント合格: スキル評価に合格したとき → 候補者に送信
    AssessmentPassed,
}

/// 配信プロバイダが発行するメッセージ ID
///
/// 送信成功時のレスポンスにそのまま含める不透明な識別子。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{_0}")]
pub struct MessageId(String);

impl MessageId {
    /// プロバイダの識別子からメッセージ ID を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// 通知の宛先
///
/// メールアドレス直接指定（`email`）とユーザー ID 指定（`user_id`）の
/// 少なくとも一方を持つ。両方指定された場合はメールアドレスを優先する
/// （ディレクトリ照会を省略できるため）。
#[derive(Debug, Clone)]
pub struct Recipient {
    email:   Option<Email>,
    user_id: Option<UserId>,
}

impl Recipient {
    /// 宛先を作成する
    ///
    /// # エラー
    ///
    /// メールアドレスとユーザー ID の両方が未指定の場合は
    /// `DomainError::Validation` を返す。
    pub fn new(email: Option<Email>, user_id: Option<UserId>) -> Result<Self, DomainError> {
        if email.is_none() && user_id.is_none() {
            return Err(DomainError::Validation(
                "宛先（to または toUserId）が指定されていません".to_string(),
            ));
        }

        Ok(Self { email, user_id })
    }

    /// 直接指定されたメールアドレスを返す
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// ディレクトリ解決用のユーザー ID を返す
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
}

/// 通知リクエスト
///
/// 通知種別・宛先・テンプレートに流し込むペイロードを束ねる。
/// ペイロードのフィールド構成は通知種別ごとのテンプレートが決める。
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    kind:      NotificationKind,
    recipient: Recipient,
    payload:   Map<String, Value>,
}

impl NotificationRequest {
    /// 新しい通知リクエストを作成する
    pub fn new(kind: NotificationKind, recipient: Recipient, payload: Map<String, Value>) -> Self {
        Self {
            kind,
            recipient,
            payload,
        }
    }

    /// 通知種別を返す
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// 宛先を返す
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// テンプレートペイロードを返す
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。EmailSender に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}
