use kodata_types::Trend;
use serde::Serialize;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// A single sample is drawn as a bar, two or more as a line
pub fn chart_kind(samples: usize) -> ChartKind {
    if samples == 1 {
        ChartKind::Bar
    } else {
        ChartKind::Line
    }
}

/// Share of multilingual datasets per sample, in percent with one decimal.
///
/// Samples with zero datasets yield 0.
pub fn multilingual_ratio_series(trend: &Trend) -> Vec<f64> {
    trend
        .total_datasets
        .iter()
        .zip(&trend.multilingual_count)
        .map(|(&total, &multilingual)| {
            if total == 0 {
                0.0
            } else {
                round1(multilingual as f64 / total as f64 * 100.0)
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
