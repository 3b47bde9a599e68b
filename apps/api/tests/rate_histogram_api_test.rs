//! # レートヒストグラム API の統合テスト
//!
//! バケット集計・レンジ選択・プリセットのレスポンス形状を検証する。

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use talentflow_api::{
    app_builder::build_app,
    handler::NotificationState,
    usecase::{NotificationService, TemplateRenderer},
};
use talentflow_infra::mock::{MockEmailSender, MockUserDirectory};
use tower::ServiceExt;

/// テスト用アプリを構築する（通知側はモックで埋める）
fn test_app() -> Router {
    let template_renderer = TemplateRenderer::new().unwrap();
    let service = NotificationService::new(
        Arc::new(MockEmailSender::new()),
        Arc::new(MockUserDirectory::new()),
        template_renderer,
        "http://localhost:5173".to_string(),
    );
    build_app(Arc::new(NotificationState { service }))
}

/// JSON ボディ付きの POST リクエストを構築する
fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/rates/histogram")
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
async fn 全件同値のレートで10バケットと高さ100を返す() {
    let app = test_app();

    let response = app
        .oneshot(post_json(json!({ "rates": [10.0, 10.0, 10.0] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    let buckets = body["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 10);
    assert_eq!(buckets[0]["count"], json!(3));
    assert_eq!(buckets[0]["height_percent"], json!(100.0));
    assert_eq!(body["bounds"], json!({ "min": 10.0, "max": 10.0 }));
}

#[tokio::test]
async fn 零以下のレートは集計から除外される() {
    let app = test_app();

    let response = app
        .oneshot(post_json(json!({ "rates": [-5.0, 0.0, 20.0] })))
        .await
        .unwrap();

    let body = read_json(response).await;
    let total: u64 = body["buckets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();

    assert_eq!(total, 1);
    assert_eq!(body["bounds"], json!({ "min": 20.0, "max": 20.0 }));
}

#[tokio::test]
async fn 有効なレートがない場合はバケットなしになる() {
    for rates in [json!([]), json!([0.0, -1.0])] {
        let response = test_app()
            .oneshot(post_json(json!({ "rates": rates })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["buckets"], json!([]));
        assert!(body.get("bounds").is_none());
        assert!(body.get("selection").is_none());
    }
}

#[tokio::test]
async fn レンジ選択はハイライトフラグにのみ反映される() {
    let app = test_app();

    let response = app
        .oneshot(post_json(json!({
            "rates": [5.0, 12.0, 18.0, 22.0, 40.0],
            "min": "15",
            "max": "25"
        })))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["selection"], json!({ "min": 15.0, "max": 25.0 }));

    // 選択レンジはハイライト用であり、集計からは除外しない
    let total: u64 = body["buckets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 5);

    // in_selected_range のバケットはすべて選択レンジに収まっている
    for bucket in body["buckets"].as_array().unwrap() {
        if bucket["in_selected_range"] == json!(true) {
            assert!(bucket["range_start"].as_f64().unwrap() >= 15.0);
            assert!(bucket["range_end"].as_f64().unwrap() <= 25.0);
        }
    }
}

#[tokio::test]
async fn 未指定のレンジは計算済み境界にフォールバックする() {
    let app = test_app();

    let response = app
        .oneshot(post_json(json!({ "rates": [5.3, 19.2] })))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["bounds"], json!({ "min": 5.0, "max": 20.0 }));
    assert_eq!(body["selection"], json!({ "min": 5.0, "max": 20.0 }));
}

#[tokio::test]
async fn プリセットは常に4件返る() {
    let app = test_app();

    let response = app.oneshot(post_json(json!({ "rates": [] }))).await.unwrap();

    let body = read_json(response).await;
    assert_eq!(
        body["presets"],
        json!([
            { "label": "Any", "min": "", "max": "" },
            { "label": "$5-15", "min": "5", "max": "15" },
            { "label": "$15-25", "min": "15", "max": "25" },
            { "label": "$25+", "min": "25", "max": "" },
        ])
    );
}
