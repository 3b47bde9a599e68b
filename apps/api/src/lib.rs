//! # TalentFlow API
//!
//! フロントエンドに公開する HTTP API サービス。
//!
//! ## 提供する機能
//!
//! - **通知ディスパッチ**: 通知種別とペイロードからメールを生成し、
//!   配信プロバイダ経由で送信する
//! - **レートヒストグラム**: 時給レート列をバケット集計し、
//!   レンジ選択ウィジェットの描画データを返す
//!
//! ## レイヤー構成
//!
//! - [`handler`] - axum ハンドラ（薄い DTO 変換のみ）
//! - [`usecase`] - ビジネスロジックの編成（宛先解決 → レンダリング → 送信）
//! - [`config`] - 環境変数ベースの設定
//! - [`error`] - API エラーと HTTP レスポンスへの変換

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
