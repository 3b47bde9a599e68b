//! # ユーザーディレクトリクライアント
//!
//! 認証基盤の管理 API からユーザーのメールアドレスを照会する。
//!
//! ## エンドポイント
//!
//! - `GET /admin/users/{user_id}` - ユーザー情報を取得（サービスキー認証）
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: テスト時にスタブを使用できるようトレイトで定義
//! - **見つからない ≠ エラー**: 404 とメールアドレス未登録は `Ok(None)` を返す。
//!   呼び出し側はこれを「宛先なし」として扱う

use async_trait::async_trait;
use serde::Deserialize;
use talentflow_domain::user::{Email, UserId};
use thiserror::Error;

/// ユーザーディレクトリクライアントエラー
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// ディレクトリサービスが利用不可（接続失敗・タイムアウト）
    #[error("ユーザーディレクトリが一時的に利用できません")]
    ServiceUnavailable,

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            DirectoryError::ServiceUnavailable
        } else {
            DirectoryError::Network(err.to_string())
        }
    }
}

/// ディレクトリ API のユーザーレスポンス
#[derive(Debug, Deserialize)]
struct DirectoryUserResponse {
    email: Option<String>,
}

/// ユーザーディレクトリトレイト
///
/// ユーザー ID からメールアドレスを解決する。
/// 見つからない場合は `Ok(None)`（エラーではない）。
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// ユーザーのメールアドレスを照会する
    async fn find_email(&self, user_id: &UserId) -> Result<Option<Email>, DirectoryError>;
}

/// ユーザーディレクトリクライアント実装
pub struct HttpUserDirectory {
    client:      reqwest::Client,
    base_url:    String,
    service_key: String,
}

impl HttpUserDirectory {
    /// 新しいディレクトリクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: ディレクトリ API のベース URL
    /// - `service_key`: 管理 API 用のサービスキー
    pub fn new(base_url: &str, service_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn find_email(&self, user_id: &UserId) -> Result<Option<Email>, DirectoryError> {
        let url = format!("{}/admin/users/{}", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.json::<DirectoryUserResponse>().await?;

                // メールアドレス未登録・形式不正はいずれも「宛先なし」扱い
                let email = body.email.and_then(|raw| match Email::new(raw) {
                    Ok(email) => Some(email),
                    Err(e) => {
                        tracing::warn!(
                            user_id = %user_id,
                            error = %e,
                            "ディレクトリが返したメールアドレスが不正"
                        );
                        None
                    }
                });

                Ok(email)
            }
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(DirectoryError::ServiceUnavailable),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(DirectoryError::Unexpected(format!(
                    "予期しないステータス {status}: {body}"
                )))
            }
        }
    }
}
