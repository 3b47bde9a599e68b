//! # レートヒストグラムハンドラ
//!
//! 時給レートのヒストグラム API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/rates/histogram` - レート列をバケット集計する
//!
//! ## 設計方針
//!
//! - 計算はすべてドメイン層（[`RateHistogram`] / [`RateRangeSelection`]）に委譲
//! - 有効なレートが 1 件もない場合はバケットなしで応答（エラーにしない）
//! - レンジ選択はバケットの `in_selected_range` フラグにのみ反映（集計には影響しない）

use axum::Json;
use serde::{Deserialize, Serialize};
use talentflow_domain::rate_filter::{RateHistogram, RatePreset, RateRangeSelection};

/// ヒストグラム計算リクエスト
#[derive(Debug, Deserialize)]
pub struct RateHistogramRequest {
    /// 時給レート列（0 以下は集計から除外される）
    pub rates: Vec<f64>,
    /// 選択中の下限（フリーテキスト入力の文字列、未指定可）
    pub min:   Option<String>,
    /// 選択中の上限（フリーテキスト入力の文字列、未指定可）
    pub max:   Option<String>,
}

/// バケット 1 件分のレスポンス
#[derive(Debug, Serialize)]
pub struct BucketDto {
    pub range_start:       f64,
    pub range_end:         f64,
    pub count:             usize,
    pub height_percent:    f64,
    pub in_selected_range: bool,
}

/// ヒストグラムの全体境界
#[derive(Debug, Serialize)]
pub struct BoundsDto {
    pub min: f64,
    pub max: f64,
}

/// 有効なレンジ選択（境界フォールバック適用後）
#[derive(Debug, Serialize)]
pub struct SelectionDto {
    pub min: f64,
    pub max: f64,
}

/// プリセットボタン 1 件分のレスポンス
///
/// `min` / `max` はレンジ変更コールバックにそのまま渡す文字列。
/// 空文字列は「指定なし」を意味する。
#[derive(Debug, Serialize)]
pub struct PresetDto {
    pub label: &'static str,
    pub min:   &'static str,
    pub max:   &'static str,
}

/// ヒストグラム計算レスポンス
#[derive(Debug, Serialize)]
pub struct RateHistogramResponse {
    pub buckets: Vec<BucketDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionDto>,
    pub presets: Vec<PresetDto>,
}

/// レート列をバケット集計する
///
/// `POST /api/v1/rates/histogram`
pub async fn compute_rate_histogram(
    Json(request): Json<RateHistogramRequest>,
) -> Json<RateHistogramResponse> {
    let histogram = RateHistogram::compute(&request.rates);

    let presets = RatePreset::ALL
        .iter()
        .map(|preset| {
            let (min, max) = preset.range_strings();
            PresetDto {
                label: preset.label(),
                min,
                max,
            }
        })
        .collect();

    let Some(bounds) = histogram.bounds() else {
        return Json(RateHistogramResponse {
            buckets: Vec::new(),
            bounds: None,
            selection: None,
            presets,
        });
    };

    let selection =
        RateRangeSelection::parse(request.min.as_deref(), request.max.as_deref(), bounds);

    let buckets = histogram
        .buckets()
        .iter()
        .map(|bucket| BucketDto {
            range_start:       bucket.range_start,
            range_end:         bucket.range_end,
            count:             bucket.count,
            height_percent:    bucket.height_percent,
            in_selected_range: selection.contains(bucket),
        })
        .collect();

    Json(RateHistogramResponse {
        buckets,
        bounds: Some(BoundsDto {
            min: bounds.min,
            max: bounds.max,
        }),
        selection: Some(SelectionDto {
            min: selection.min(),
            max: selection.max(),
        }),
        presets,
    })
}
