use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{format_signed, format_thousands};
use crate::presentation::view_models::{
    Badge, BadgeTone, ChangeKind, ChangelogItem, ChangelogViewModel, CreateView, ViewMode,
};

impl CreateView for ChangelogViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ChangelogView::new(self, mode))
    }
}

pub struct ChangelogView<'a> {
    data: &'a ChangelogViewModel,
    mode: ViewMode,
}

impl<'a> ChangelogView<'a> {
    pub fn new(data: &'a ChangelogViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn sections(&self) -> [(&'static str, &'a [ChangelogItem]); 3] {
        [
            ("changelog.new", self.data.new_datasets.as_slice()),
            ("changelog.updated", self.data.updated_datasets.as_slice()),
            ("changelog.removed", self.data.removed_datasets.as_slice()),
        ]
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, items) in self.sections() {
            for item in items {
                writeln!(f, "{}\t{}", marker(item.kind), item.id)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_period(f)?;
        for (_, items) in self.sections() {
            for item in items {
                let badges: Vec<&str> = item.badges.iter().map(|b| b.label.as_str()).collect();
                writeln!(f, "{} {}  {}", marker(item.kind), item.id, badges.join(", ").dimmed())?;
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        let m = &self.data.messages;
        let s = &self.data.summary;

        self.render_period(f)?;
        writeln!(f)?;

        writeln!(
            f,
            "  {} {}   {} {}   {} {}   {} {}",
            m.get("changelog.new"),
            s.new_count.to_string().green(),
            m.get("changelog.removed"),
            s.removed_count.to_string().red(),
            m.get("changelog.updated"),
            s.updated_count.to_string().yellow(),
            m.get("changelog.unchanged"),
            s.unchanged_count,
        )?;
        writeln!(f, "  {} {}", m.get("changelog.net"), format_signed(s.net_change).bold())?;

        for (key, items) in self.sections() {
            if items.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{} ({})", m.get(key).bold(), items.len())?;
            for item in items {
                self.render_item(f, item, verbose)?;
            }
        }
        Ok(())
    }

    fn render_item(&self, f: &mut fmt::Formatter, item: &ChangelogItem, verbose: bool) -> fmt::Result {
        let m = &self.data.messages;

        writeln!(f, "  {} {}", marker(item.kind), item.id.cyan())?;
        writeln!(f, "    {}", m.format("changelog.author", &[("author", &item.author)]).dimmed())?;

        if !item.badges.is_empty() {
            let badges: Vec<String> = item.badges.iter().map(paint_badge).collect();
            writeln!(f, "    {}", badges.join("  "))?;
        }
        if let Some(description) = &item.description {
            writeln!(f, "    {}", description)?;
        }
        if verbose {
            writeln!(f, "    {}", item.url.blue())?;
        }
        Ok(())
    }

    fn render_period(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{}",
            d.messages.format(
                "changelog.period",
                &[
                    ("previous", &d.previous_date),
                    ("current", &d.current_date),
                    ("previous_count", &format_thousands(d.previous_count)),
                    ("current_count", &format_thousands(d.current_count)),
                ],
            )
        )
    }
}

fn marker(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::New => "+",
        ChangeKind::Removed => "-",
        ChangeKind::Updated => "~",
    }
}

fn paint_badge(badge: &Badge) -> String {
    let label = format!("[{}]", badge.label);
    match badge.tone {
        BadgeTone::Positive => label.green().to_string(),
        BadgeTone::Negative => label.red().to_string(),
        BadgeTone::Neutral => label.dimmed().to_string(),
    }
}

impl<'a> fmt::Display for ChangelogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f, false),
            ViewMode::Verbose => self.render_standard(f, true),
        }
    }
}
