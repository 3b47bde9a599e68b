//! # 時給レートフィルタ
//!
//! 時給レートのヒストグラム計算とレンジ選択を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 |
//! |---|------------|
//! | [`RateHistogram`] | 有効レートを 10 バケットに集計したヒストグラム |
//! | [`HistogramBucket`] | 等幅の数値区間 1 つ分（件数と相対高さを持つ） |
//! | [`RateRangeSelection`] | ユーザーが選択中の min/max レンジ |
//! | [`RatePreset`] | レンジ選択のプリセット（4 種類） |
//!
//! ## 設計方針
//!
//! - **純粋な計算**: I/O なし、同期、入力が同じなら出力も同じ
//! - **エラーなし**: 退化した入力（空、全件非正）は空のヒストグラムになる
//! - **選択はハイライト用**: レンジ選択はバケットの強調表示にのみ使い、
//!   集計からの除外には使わない

use itertools::{Itertools, MinMaxResult};

/// バケット数（固定）
pub const BUCKET_COUNT: usize = 10;

/// ヒストグラムの全体境界
///
/// 有効レートの `floor(min)` / `ceil(max)`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBounds {
    pub min: f64,
    pub max: f64,
}

/// ヒストグラムバケット
///
/// `range_start` / `range_end` は表示用に丸めた `[start, end)` 境界。
/// `height_percent` は最大件数バケットを 100 とした相対高さ。
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBucket {
    pub range_start:    f64,
    pub range_end:      f64,
    pub count:          usize,
    pub height_percent: f64,
}

/// 時給レートのヒストグラム
///
/// 厳密に正のレートのみを集計対象とする。有効なレートが 1 件もない場合は
/// バケットなし（呼び出し側は何も描画しない）。
#[derive(Debug, Clone, PartialEq)]
pub struct RateHistogram {
    buckets: Vec<HistogramBucket>,
    bounds:  Option<RateBounds>,
}

impl RateHistogram {
    /// レート列からヒストグラムを計算する
    ///
    /// 1. 厳密に正の値のみ残す（0 以下と非有限値は除外）
    /// 2. `floor(min)` / `ceil(max)` を全体境界とする
    /// 3. 全体を等幅 10 バケットに分割（`min == max` の場合はレンジを 1 とする）
    /// 4. 各レートを `floor((value - min) / width)` のバケットに割り当てる
    ///    （上端の値は最後のバケットにクランプ）
    /// 5. 相対高さは `count / max(最大件数, 1) × 100`
    pub fn compute(rates: &[f64]) -> Self {
        let valid: Vec<f64> = rates
            .iter()
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .collect();

        let (raw_min, raw_max) = match valid.iter().copied().minmax() {
            MinMaxResult::NoElements => {
                return Self {
                    buckets: Vec::new(),
                    bounds:  None,
                };
            }
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let min = raw_min.floor();
        let max = raw_max.ceil();

        // min == max の退化ケースではレンジを 1 と定義して幅 0 を避ける
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let width = range / BUCKET_COUNT as f64;

        let mut counts = [0usize; BUCKET_COUNT];
        for value in &valid {
            let index = (((value - min) / width).floor() as usize).min(BUCKET_COUNT - 1);
            counts[index] += 1;
        }

        let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

        let buckets = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramBucket {
                range_start:    (min + i as f64 * width).round(),
                range_end:      (min + (i + 1) as f64 * width).round(),
                count,
                height_percent: count as f64 / max_count as f64 * 100.0,
            })
            .collect();

        Self {
            buckets,
            bounds: Some(RateBounds { min, max }),
        }
    }

    /// バケット列を返す（有効レートがない場合は空）
    pub fn buckets(&self) -> &[HistogramBucket] {
        &self.buckets
    }

    /// 全体境界を返す（有効レートがない場合は `None`）
    pub fn bounds(&self) -> Option<RateBounds> {
        self.bounds
    }

    /// 描画対象がないかどうか
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// 選択中の min/max レンジ
///
/// フリーテキスト入力の文字列からパースし、未指定・パース不能な側は
/// ヒストグラムの計算済み境界にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRangeSelection {
    min: f64,
    max: f64,
}

impl RateRangeSelection {
    /// 入力文字列と計算済み境界からレンジ選択を構築する
    pub fn parse(min_input: Option<&str>, max_input: Option<&str>, bounds: RateBounds) -> Self {
        let min = min_input
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(bounds.min);
        let max = max_input
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(bounds.max);

        Self { min, max }
    }

    /// 選択中の下限
    pub fn min(&self) -> f64 {
        self.min
    }

    /// 選択中の上限
    pub fn max(&self) -> f64 {
        self.max
    }

    /// バケットが選択レンジに完全に含まれるかどうか
    ///
    /// `start >= 選択 min` かつ `end <= 選択 max` のときに真。
    /// ハイライト表示にのみ使用し、集計には影響しない。
    pub fn contains(&self, bucket: &HistogramBucket) -> bool {
        bucket.range_start >= self.min && bucket.range_end <= self.max
    }
}

/// レンジ選択のプリセット
///
/// ウィジェットのプリセットボタンに対応する。各プリセットは
/// レンジ変更コールバックに渡す `(min 文字列, max 文字列)` を定義し、
/// 空文字列は「指定なし」を意味する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatePreset {
    /// 指定なし（両端をクリア）
    Any,
    /// $5〜$15
    UpTo15,
    /// $15〜$25
    MidRange,
    /// $25 以上
    TopRate,
}

impl RatePreset {
    /// 全プリセット（表示順）
    pub const ALL: [RatePreset; 4] = [
        RatePreset::Any,
        RatePreset::UpTo15,
        RatePreset::MidRange,
        RatePreset::TopRate,
    ];

    /// ボタンに表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::UpTo15 => "$5-15",
            Self::MidRange => "$15-25",
            Self::TopRate => "$25+",
        }
    }

    /// レンジ変更コールバックに渡す `(min, max)` の文字列ペア
    pub fn range_strings(&self) -> (&'static str, &'static str) {
        match self {
            Self::Any => ("", ""),
            Self::UpTo15 => ("5", "15"),
            Self::MidRange => ("15", "25"),
            Self::TopRate => ("25", ""),
        }
    }
}
