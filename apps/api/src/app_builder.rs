//! # API アプリケーション構築
//!
//! ルーター構築とミドルウェアレイヤーの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use talentflow_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    NotificationState,
    compute_rate_histogram,
    health_check,
    send_notification,
};

/// ルーター定義とレイヤーの組み立てを行う
///
/// 通知 API はモック差し替えのため State を外から受け取る。
/// ヒストグラム API は純粋計算のため State を持たない。
pub fn build_app(notification_state: Arc<NotificationState>) -> Router {
    // CORS: フロントエンドウィジェットからのクロスオリジン呼び出しを許可する。
    // プリフライト（OPTIONS）はこのレイヤーが 200 で応答する
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/notifications", post(send_notification))
        .with_state(notification_state)
        .route("/api/v1/rates/histogram", post(compute_rate_histogram))
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
