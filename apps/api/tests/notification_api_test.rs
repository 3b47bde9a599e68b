//! # 通知 API の統合テスト
//!
//! モックの配信バックエンド・ユーザーディレクトリを注入したルーターに対して、
//! エンドポイントのステータスコードとレスポンス形状を検証する。

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use talentflow_api::{
    app_builder::build_app,
    handler::NotificationState,
    usecase::{NotificationService, TemplateRenderer},
};
use talentflow_domain::user::{Email, UserId};
use talentflow_infra::mock::{MockEmailSender, MockUserDirectory};
use tower::ServiceExt;

/// モックを注入したテスト用アプリを構築する
fn test_app(sender: MockEmailSender, directory: MockUserDirectory) -> Router {
    let template_renderer = TemplateRenderer::new().unwrap();
    let service = NotificationService::new(
        Arc::new(sender),
        Arc::new(directory),
        template_renderer,
        "http://localhost:5173".to_string(),
    );
    build_app(Arc::new(NotificationState { service }))
}

/// JSON ボディ付きの POST リクエストを構築する
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// レスポンスボディを JSON として読み出す
async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn 直接指定の宛先で送信成功レスポンスを返す() {
    let sender = MockEmailSender::new();
    let app = test_app(sender.clone(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "to": "tanaka@example.com",
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["id"], json!("mock-message-id"));
    assert!(body.get("reason").is_none());

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "tanaka@example.com");
}

#[tokio::test]
async fn ユーザーid指定はディレクトリで解決して送信する() {
    let sender = MockEmailSender::new();
    let directory = MockUserDirectory::new();
    let user_id = UserId::new();
    directory.insert(user_id.clone(), Email::new("suzuki@example.com").unwrap());
    let app = test_app(sender.clone(), directory);

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "job_application",
                "toUserId": user_id.as_uuid().to_string(),
                "data": {
                    "applicant_name": "田中太郎",
                    "job_title": "Rust エンジニア"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(sender.sent_emails()[0].to, "suzuki@example.com");
}

#[tokio::test]
async fn ディレクトリ未登録のユーザーはno_emailレスポンスになる() {
    let sender = MockEmailSender::new();
    let app = test_app(sender.clone(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "toUserId": UserId::new().as_uuid().to_string(),
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    // 宛先なしはエラーではなく正常終了
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["reason"], json!("no_email"));
    assert!(body.get("id").is_none());
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn ディレクトリ照会エラーもno_emailレスポンスになる() {
    let sender = MockEmailSender::new();
    let app = test_app(sender.clone(), MockUserDirectory::failing());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "toUserId": UserId::new().as_uuid().to_string(),
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["reason"], json!("no_email"));
}

#[tokio::test]
async fn 未知の通知種別は400になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "password_reset",
                "to": "tanaka@example.com",
                "data": {}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("password_reset"));
}

#[tokio::test]
async fn 宛先が両方未指定の場合は400になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn dataが未指定の場合は400になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "to": "tanaka@example.com"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("data"));
}

#[tokio::test]
async fn 不正なメールアドレスは400になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "to": "not-an-address",
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn 配信失敗は500とエラーメッセージになる() {
    let sender = MockEmailSender::failing("Resend API エラー 503");
    let app = test_app(sender, MockUserDirectory::new());

    let response = app
        .oneshot(post_json(
            "/api/v1/notifications",
            json!({
                "type": "new_message",
                "to": "tanaka@example.com",
                "data": {
                    "sender_name": "鈴木一郎",
                    "message_preview": "来週の件ですが"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    // 配信失敗はプロバイダのエラーメッセージをそのまま返す
    assert!(body["error"].as_str().unwrap().contains("Resend API エラー 503"));
}

#[tokio::test]
async fn getメソッドは405になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn クロスオリジンのプリフライトは200になる() {
    let app = test_app(MockEmailSender::new(), MockUserDirectory::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/notifications")
                .header("origin", "http://localhost:5173")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin"),
        "CORS ヘッダーが付与されること"
    );
}
