//! Trends tab: growth summary over a 2x2 chart grid.

use kodata_engine::ChartKind;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset as ChartSeries, GraphType,
        Paragraph,
    },
};

use crate::i18n::Messages;
use crate::presentation::formatters::format_thousands;
use crate::presentation::view_models::{ChartConfig, PanelState, TrendsViewModel};
use crate::presentation::views::tui::{loading_paragraph, notice_paragraph};

// Bars hold integers; ratios keep one decimal
const RATIO_SCALE: f64 = 10.0;

pub struct TrendsComponent;

impl TrendsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &PanelState<TrendsViewModel>,
        messages: &Messages,
    ) {
        let data = match state {
            PanelState::Loading => {
                f.render_widget(loading_paragraph(messages), area);
                return;
            }
            PanelState::Failed(notice) => {
                f.render_widget(notice_paragraph(notice), area);
                return;
            }
            PanelState::Ready(data) => data,
        };

        let [summary_area, grid] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(8)]).areas(area);
        f.render_widget(summary(data, messages), summary_area);

        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(grid);
        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let [a, b] = halves.areas(top);
        let [c, d] = halves.areas(bottom);

        for (chart, cell) in data.charts.iter().zip([a, b, c, d]) {
            render_chart(f, cell, chart);
        }
    }
}

impl Default for TrendsComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn summary<'a>(data: &'a TrendsViewModel, messages: &Messages) -> Paragraph<'a> {
    let s = &data.summary;
    let growth_color = if s.growth_rate > 0.0 {
        Color::Green
    } else if s.growth_rate < 0.0 {
        Color::Red
    } else {
        Color::White
    };

    let mut spans = vec![
        Span::raw(format!("{} ", messages.get("trends.growth"))),
        Span::styled(
            s.growth_label.as_str(),
            Style::default().fg(growth_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   {} {}", messages.get("trends.weeks"), s.total_weeks)),
    ];
    if let Some(range) = &s.date_range {
        spans.push(Span::raw(format!("   {} {}", messages.get("trends.range"), range)));
    }

    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
}

fn render_chart(f: &mut Frame, area: Rect, chart: &ChartConfig) {
    let [r, g, b] = chart.color;
    let color = Color::Rgb(r, g, b);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(chart.label.as_str(), Style::default().fg(color)));

    if chart.data.is_empty() {
        f.render_widget(block, area);
        return;
    }

    match chart.kind {
        ChartKind::Bar => {
            let percent = chart.y_axis.tick_suffix.is_some();
            let bars: Vec<Bar> = chart
                .labels
                .iter()
                .zip(&chart.data)
                .map(|(label, &value)| {
                    let (scaled, text) = if percent {
                        ((value * RATIO_SCALE).round() as u64, format!("{}%", value))
                    } else {
                        (value as u64, format_thousands(value as u64))
                    };
                    Bar::default()
                        .value(scaled)
                        .text_value(text)
                        .label(Line::from(label.as_str()))
                        .style(Style::default().fg(color))
                })
                .collect();

            let mut widget = BarChart::default()
                .block(block)
                .data(BarGroup::default().bars(&bars))
                .bar_width(10)
                .bar_gap(1);
            if let Some(max) = chart.y_axis.max {
                let scale = if percent { RATIO_SCALE } else { 1.0 };
                widget = widget.max((max * scale) as u64);
            }
            f.render_widget(widget, area);
        }
        ChartKind::Line => {
            let points: Vec<(f64, f64)> = chart
                .data
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();

            let top = chart
                .y_axis
                .max
                .unwrap_or_else(|| chart.data.iter().copied().fold(0.0, f64::max) * 1.1)
                .max(1.0);
            let last = (points.len() - 1) as f64;

            let x_labels = match (chart.labels.first(), chart.labels.last()) {
                (Some(first), Some(end)) => vec![first.clone(), end.clone()],
                _ => Vec::new(),
            };
            let y_labels = vec!["0".to_string(), format_thousands(top as u64)];

            let series = ChartSeries::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&points);

            let widget = Chart::new(vec![series])
                .block(block)
                .x_axis(
                    Axis::default()
                        .style(Style::default().fg(Color::DarkGray))
                        .bounds([0.0, last])
                        .labels(x_labels),
                )
                .y_axis(
                    Axis::default()
                        .style(Style::default().fg(Color::DarkGray))
                        .bounds([0.0, top])
                        .labels(y_labels),
                );
            f.render_widget(widget, area);
        }
    }
}
