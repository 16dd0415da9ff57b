use kodata_engine::{ChartKind, chart_kind, multilingual_ratio_series};
use kodata_types::Trend;

use super::display_date;
use crate::i18n::Messages;
use crate::presentation::formatters::format_growth;
use crate::presentation::view_models::{
    ChartConfig, CommandResultViewModel, StatusBadge, TrendSummary, TrendsViewModel, YAxis,
};

const DATASETS_RGB: [u8; 3] = [255, 107, 53];
const DOWNLOADS_RGB: [u8; 3] = [0, 78, 137];
const LIKES_RGB: [u8; 3] = [46, 204, 113];
const MULTILINGUAL_RGB: [u8; 3] = [155, 89, 182];

pub fn present_trend_summary(trend: &Trend) -> TrendSummary {
    let date_range = match (&trend.first_date, &trend.last_date) {
        (Some(first), Some(last)) => Some(format!("{} ~ {}", display_date(first), display_date(last))),
        _ => None,
    };

    TrendSummary {
        growth_rate: trend.growth_rate,
        growth_label: format_growth(trend.growth_rate),
        total_weeks: trend.total_weeks,
        date_range,
    }
}

/// Chart for one of the totals series; bar for a single sample, line otherwise
pub fn present_chart(label: String, labels: &[String], values: &[u64], rgb: [u8; 3]) -> ChartConfig {
    let kind = chart_kind(labels.len());
    let data = values.iter().map(|&v| v as f64).collect();

    chart(kind, label, labels.to_vec(), data, rgb, YAxis {
        begin_at_zero: true,
        max: None,
        tick_suffix: None,
    })
}

fn ratio_chart(label: String, labels: &[String], trend: &Trend) -> ChartConfig {
    chart(
        ChartKind::Bar,
        label,
        labels.to_vec(),
        multilingual_ratio_series(trend),
        MULTILINGUAL_RGB,
        YAxis {
            begin_at_zero: true,
            max: Some(100.0),
            tick_suffix: Some("%".to_string()),
        },
    )
}

fn chart(
    kind: ChartKind,
    label: String,
    labels: Vec<String>,
    data: Vec<f64>,
    rgb: [u8; 3],
    y_axis: YAxis,
) -> ChartConfig {
    let [r, g, b] = rgb;
    let (alpha, fill, border_width) = match kind {
        ChartKind::Bar => (0.7, false, 1),
        ChartKind::Line => (0.1, true, 2),
    };

    ChartConfig {
        kind,
        label,
        labels,
        data,
        color: rgb,
        border_color: format!("#{:02x}{:02x}{:02x}", r, g, b),
        background_color: format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        fill,
        border_width,
        tension: 0.4,
        y_axis,
    }
}

pub fn present_trends(
    trend: &Trend,
    generated_at: Option<&str>,
    messages: Messages,
) -> CommandResultViewModel<TrendsViewModel> {
    let labels: Vec<String> = trend.dates.iter().map(|d| display_date(d)).collect();

    let charts = vec![
        present_chart(
            messages.get("chart.datasets").to_string(),
            &labels,
            &trend.total_datasets,
            DATASETS_RGB,
        ),
        present_chart(
            messages.get("chart.downloads").to_string(),
            &labels,
            &trend.total_downloads,
            DOWNLOADS_RGB,
        ),
        present_chart(
            messages.get("chart.likes").to_string(),
            &labels,
            &trend.total_likes,
            LIKES_RGB,
        ),
        ratio_chart(messages.get("chart.multilingual").to_string(), &labels, trend),
    ];

    let view_model = TrendsViewModel {
        generated_at: generated_at.map(String::from),
        summary: present_trend_summary(trend),
        charts,
        messages,
    };

    let badge = if trend.is_empty() {
        StatusBadge::info(messages.get("trends.no_samples"))
    } else {
        StatusBadge::success(messages.format(
            "trends.loaded",
            &[("weeks", &trend.len().to_string())],
        ))
    };
    CommandResultViewModel::new(view_model).with_badge(badge)
}
