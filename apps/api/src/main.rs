//! # API サーバー
//!
//! フロントエンドに公開する HTTP API サービスのエントリーポイント。
//!
//! ## 役割
//!
//! - **通知ディスパッチ**: テンプレートレンダリングとメール配信
//! - **レートヒストグラム**: レンジ選択ウィジェット向けのバケット集計
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `EMAIL_BACKEND` | No | `resend` \| `smtp` \| `noop`（デフォルト: `noop`） |
//! | `RESEND_API_KEY` | backend=resend | Resend の API キー |
//! | `RESEND_BASE_URL` | No | Resend API のベース URL |
//! | `SMTP_HOST` / `SMTP_PORT` | backend=smtp | SMTP サーバー（デフォルト: Mailpit） |
//! | `EMAIL_FROM_ADDRESS` | No | 送信元メールアドレス |
//! | `DIRECTORY_BASE_URL` | No | ユーザーディレクトリ API のベース URL |
//! | `DIRECTORY_SERVICE_KEY` | No | ディレクトリ管理 API のサービスキー |
//! | `NOTIFICATION_BASE_URL` | No | メール内リンクのベース URL |
//! | `LOG_FORMAT` | No | `json` \| `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p talentflow-api
//!
//! # 本番環境
//! EMAIL_BACKEND=resend RESEND_API_KEY=re_xxx cargo run -p talentflow-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use talentflow_api::{
    app_builder::build_app,
    config::ApiConfig,
    handler::NotificationState,
    usecase::{NotificationService, TemplateRenderer},
};
use talentflow_infra::{
    EmailSender,
    HttpUserDirectory,
    NoopEmailSender,
    ResendEmailSender,
    SmtpEmailSender,
    UserDirectory,
};
use talentflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("api"));

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "API サーバーを起動します: {}:{} (email backend: {})",
        config.host,
        config.port,
        config.email.backend,
    );

    // メール配信バックエンドを初期化
    let sender: Arc<dyn EmailSender> = match config.email.backend.as_str() {
        "resend" => Arc::new(ResendEmailSender::new(
            &config.email.resend_base_url,
            config.email.resend_api_key.clone(),
            config.email.from_address.clone(),
        )),
        "smtp" => Arc::new(SmtpEmailSender::new(
            &config.email.smtp_host,
            config.email.smtp_port,
            config.email.from_address.clone(),
        )),
        _ => Arc::new(NoopEmailSender),
    };

    // ユーザーディレクトリクライアントを初期化
    let directory: Arc<dyn UserDirectory> = Arc::new(HttpUserDirectory::new(
        &config.directory.base_url,
        config.directory.service_key.clone(),
    ));

    // 通知サービスを組み立てる
    let template_renderer = TemplateRenderer::new().expect("テンプレートの初期化に失敗しました");
    let service = NotificationService::new(
        sender,
        directory,
        template_renderer,
        config.base_url.clone(),
    );
    let notification_state = Arc::new(NotificationState { service });

    // ルーター構築
    let app = build_app(notification_state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
