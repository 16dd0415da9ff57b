use kodata_engine::ChartKind;
use serde::Serialize;

use crate::i18n::Messages;

#[derive(Debug, Clone, Serialize)]
pub struct TrendSummary {
    pub growth_rate: f64,
    /// `+{rate}%` when positive, `{rate}%` otherwise
    pub growth_label: String,
    pub total_weeks: u64,
    /// `first ~ last` when both ends are known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_suffix: Option<String>,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub label: String,
    /// One `YYYY-MM-DD` label per sample
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub color: [u8; 3],
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub border_width: u8,
    pub tension: f64,
    pub y_axis: YAxis,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendsViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub summary: TrendSummary,
    pub charts: Vec<ChartConfig>,

    #[serde(skip)]
    pub messages: Messages,
}
