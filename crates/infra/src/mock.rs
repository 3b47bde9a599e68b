//! # テスト用モック実装
//!
//! ユースケーステストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! talentflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use talentflow_domain::{
    notification::{EmailMessage, MessageId, NotificationError},
    user::{Email, UserId},
};

use crate::{
    directory::{DirectoryError, UserDirectory},
    email::EmailSender,
};

// ===== MockEmailSender =====

/// テスト用のモック EmailSender
///
/// 送信されたメッセージを記録する。`failing()` で生成すると
/// すべての送信が `SendFailed` になる。
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent:         Arc<Mutex<Vec<EmailMessage>>>,
    fail_message: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗するモックを作成する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent:         Arc::new(Mutex::new(Vec::new())),
            fail_message: Some(message.into()),
        }
    }

    /// 記録された送信メッセージを返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<MessageId, NotificationError> {
        if let Some(message) = &self.fail_message {
            return Err(NotificationError::SendFailed(message.clone()));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(MessageId::new("mock-message-id"))
    }
}

// ===== MockUserDirectory =====

/// テスト用のモック UserDirectory
///
/// インメモリの `UserId → Email` マップを照会する。
/// `failing()` で生成するとすべての照会がエラーになる。
#[derive(Clone, Default)]
pub struct MockUserDirectory {
    entries: Arc<Mutex<HashMap<UserId, Email>>>,
    fail:    bool,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に照会失敗するモックを作成する
    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail:    true,
        }
    }

    /// ユーザーを登録する
    pub fn insert(&self, user_id: UserId, email: Email) {
        self.entries.lock().unwrap().insert(user_id, email);
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_email(&self, user_id: &UserId) -> Result<Option<Email>, DirectoryError> {
        if self.fail {
            return Err(DirectoryError::ServiceUnavailable);
        }

        Ok(self.entries.lock().unwrap().get(user_id).cloned())
    }
}
