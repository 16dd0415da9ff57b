use owo_colors::OwoColorize;
use std::fmt;

use crate::i18n::Messages;
use crate::presentation::formatters::format_thousands;
use crate::presentation::view_models::{
    CreateView, RankedEntry, StatisticsPanel, StatisticsViewModel, ViewMode,
};

impl CreateView for StatisticsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatisticsView::new(self, mode))
    }
}

pub struct StatisticsView<'a> {
    data: &'a StatisticsViewModel,
    mode: ViewMode,
}

impl<'a> StatisticsView<'a> {
    pub fn new(data: &'a StatisticsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for StatisticsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = &self.data.messages;

        if self.mode != ViewMode::Minimal
            && let Some(date) = &self.data.last_updated
        {
            writeln!(f, "{}\n", m.format("catalog.last_updated", &[("date", date)]).dimmed())?;
        }

        write!(
            f,
            "{}",
            StatisticsPanelView {
                panel: &self.data.panel,
                messages: m,
                mode: self.mode,
            }
        )
    }
}

/// Totals block, shared with the catalog header
pub struct StatisticsPanelView<'a> {
    pub panel: &'a StatisticsPanel,
    pub messages: &'a Messages,
    pub mode: ViewMode,
}

impl<'a> StatisticsPanelView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.panel;
        writeln!(
            f,
            "{}\t{}\t{}\t{}",
            p.total_datasets, p.total_downloads, p.total_likes, p.multilingual_count
        )
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.panel;
        let m = self.messages;
        writeln!(
            f,
            "{} {}  ·  {} {}  ·  {} {}  ·  {} {}",
            m.get("stats.total_datasets"),
            format_thousands(p.total_datasets),
            m.get("stats.total_downloads"),
            format_thousands(p.total_downloads),
            m.get("stats.total_likes"),
            format_thousands(p.total_likes),
            m.get("stats.multilingual"),
            format_thousands(p.multilingual_count),
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.panel;
        let m = self.messages;

        writeln!(f, "{}", m.get("stats.title").bold())?;
        for (key, value) in [
            ("stats.total_datasets", p.total_datasets),
            ("stats.total_downloads", p.total_downloads),
            ("stats.total_likes", p.total_likes),
            ("stats.multilingual", p.multilingual_count),
        ] {
            writeln!(f, "  {:<24} {:>14}", m.get(key), format_thousands(value))?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        render_ranking(f, self.messages.get("stats.top_authors"), &self.panel.top_authors)?;
        render_ranking(f, self.messages.get("stats.top_tasks"), &self.panel.top_tasks)
    }
}

fn render_ranking(f: &mut fmt::Formatter, title: &str, entries: &[RankedEntry]) -> fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{}", title.bold())?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            f,
            "  {:>2}. {:<40} {:>8}",
            i + 1,
            entry.name,
            format_thousands(entry.count)
        )?;
    }
    Ok(())
}

impl<'a> fmt::Display for StatisticsPanelView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
