//! # API エラー定義
//!
//! API サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス | レスポンスボディ |
//! |-----------|----------------|----------------|
//! | `BadRequest` | 400 | `{"error": メッセージ}` |
//! | `Delivery` | 500 | `{"error": 配信プロバイダのエラーメッセージ}` |
//! | `Internal` | 500 | `{"error": 固定メッセージ}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use talentflow_domain::DomainError;
use thiserror::Error;

/// エラーレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API サービスで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト（未知の通知種別、必須フィールド欠落など）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// メール配信の失敗
    #[error("メール配信に失敗しました: {0}")]
    Delivery(String),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // 配信失敗はプロバイダのエラーメッセージをそのまま返す
            ApiError::Delivery(msg) => {
                tracing::error!("メール配信に失敗: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn bad_requestは400になる() {
        let response = ApiError::BadRequest("不正".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn deliveryは500になる() {
        let response = ApiError::Delivery("接続拒否".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internalは500になる() {
        let response = ApiError::Internal("panic".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_errorのvalidationはbad_requestに変換される() {
        let err: ApiError = DomainError::Validation("必須です".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
