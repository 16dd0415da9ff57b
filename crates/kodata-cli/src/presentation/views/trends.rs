use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::format_thousands;
use crate::presentation::view_models::{ChartConfig, CreateView, TrendsViewModel, ViewMode};

const BAR_WIDTH: usize = 40;

impl CreateView for TrendsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TrendsView::new(self, mode))
    }
}

pub struct TrendsView<'a> {
    data: &'a TrendsViewModel,
    mode: ViewMode,
}

impl<'a> TrendsView<'a> {
    pub fn new(data: &'a TrendsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(first) = self.data.charts.first() else {
            return Ok(());
        };

        for (i, label) in first.labels.iter().enumerate() {
            write!(f, "{}", label)?;
            for chart in &self.data.charts {
                match chart.data.get(i) {
                    Some(value) => write!(f, "\t{}", value)?,
                    None => write!(f, "\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = &self.data.messages;
        let s = &self.data.summary;

        let growth = if s.growth_rate > 0.0 {
            s.growth_label.green().to_string()
        } else if s.growth_rate < 0.0 {
            s.growth_label.red().to_string()
        } else {
            s.growth_label.clone()
        };

        writeln!(f, "  {:<16} {}", m.get("trends.growth"), growth)?;
        writeln!(f, "  {:<16} {}", m.get("trends.weeks"), s.total_weeks)?;
        if let Some(range) = &s.date_range {
            writeln!(f, "  {:<16} {}", m.get("trends.range"), range)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_summary(f)?;
        for chart in &self.data.charts {
            let latest = chart.data.last().map(|v| format_value(chart, *v));
            writeln!(
                f,
                "  {:<32} {}",
                chart.label,
                latest.unwrap_or_else(|| "-".to_string())
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_summary(f)?;
        for chart in &self.data.charts {
            writeln!(f)?;
            render_chart(f, chart, self.mode == ViewMode::Verbose)?;
        }
        Ok(())
    }
}

/// Horizontal bar per sample, scaled to the chart's axis
fn render_chart(f: &mut fmt::Formatter, chart: &ChartConfig, verbose: bool) -> fmt::Result {
    let [r, g, b] = chart.color;
    writeln!(f, "{}", chart.label.bold())?;
    if verbose {
        writeln!(
            f,
            "  {}",
            format!("{:?} · {} · {}", chart.kind, chart.border_color, chart.background_color)
                .dimmed()
        )?;
    }

    let scale_max = chart
        .y_axis
        .max
        .unwrap_or_else(|| chart.data.iter().copied().fold(0.0, f64::max));

    for (label, value) in chart.labels.iter().zip(&chart.data) {
        let filled = if scale_max > 0.0 {
            ((value / scale_max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(filled.min(BAR_WIDTH));
        writeln!(
            f,
            "  {:<10} {:<width$} {}",
            label,
            bar.truecolor(r, g, b),
            format_value(chart, *value),
            width = BAR_WIDTH,
        )?;
    }
    Ok(())
}

fn format_value(chart: &ChartConfig, value: f64) -> String {
    match &chart.y_axis.tick_suffix {
        Some(suffix) => format!("{}{}", value, suffix),
        None => format_thousands(value as u64),
    }
}

impl<'a> fmt::Display for TrendsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}
