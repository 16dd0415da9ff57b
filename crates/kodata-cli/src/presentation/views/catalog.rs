use owo_colors::OwoColorize;
use std::fmt;

use super::stats::StatisticsPanelView;
use crate::presentation::formatters::{fit, format_thousands};
use crate::presentation::view_models::{
    CatalogViewModel, CreateView, DatasetCard, ExportViewModel, FilterOptionsViewModel, ViewMode,
};

const COMPACT_ID_WIDTH: usize = 48;
const COMPACT_AUTHOR_WIDTH: usize = 20;

// --------------------------------------------------------
// Catalog page
// --------------------------------------------------------

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogView::new(self, mode))
    }
}

pub struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    mode: ViewMode,
}

impl<'a> CatalogView<'a> {
    pub fn new(data: &'a CatalogViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.cards {
            writeln!(f, "{}", card.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.cards {
            writeln!(
                f,
                "{:<id_w$}  {:<author_w$}  ↓{:>10}  ♥{:>6}",
                fit(&card.id, COMPACT_ID_WIDTH),
                fit(&card.author, COMPACT_AUTHOR_WIDTH),
                format_thousands(card.downloads),
                format_thousands(card.likes),
                id_w = COMPACT_ID_WIDTH,
                author_w = COMPACT_AUTHOR_WIDTH,
            )?;
        }
        self.render_pagination(f)
    }

    fn render_standard(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        let m = &self.data.messages;

        writeln!(
            f,
            "{}",
            m.format("catalog.last_updated", &[("date", &self.data.last_updated)])
                .dimmed()
        )?;

        if let Some(panel) = &self.data.statistics {
            writeln!(f)?;
            write!(
                f,
                "{}",
                StatisticsPanelView {
                    panel,
                    messages: m,
                    mode: if verbose { ViewMode::Verbose } else { ViewMode::Standard },
                }
            )?;
        }

        for card in &self.data.cards {
            writeln!(f)?;
            self.render_card(f, card, verbose)?;
        }

        self.render_pagination(f)
    }

    fn render_card(&self, f: &mut fmt::Formatter, card: &DatasetCard, verbose: bool) -> fmt::Result {
        let m = &self.data.messages;

        writeln!(f, "{}", card.id.bold().cyan())?;
        writeln!(f, "  {}", m.format("dataset.by", &[("author", &card.author)]).dimmed())?;

        if card.has_description {
            writeln!(f, "  {}", card.body)?;
        } else {
            writeln!(f, "  {}", card.body.dimmed())?;
        }

        let mut tags: Vec<String> = card.languages.iter().map(|l| format!("[{}]", l)).collect();
        tags.extend(card.tasks.iter().map(|t| format!("<{}>", t)));
        if verbose {
            tags.extend(card.more_languages.iter().map(|l| format!("[{}]", l)));
            tags.extend(card.more_tasks.iter().map(|t| format!("<{}>", t)));
        }
        if !tags.is_empty() {
            writeln!(f, "  {}", tags.join(" ").magenta())?;
        }

        writeln!(
            f,
            "  ↓ {}  ♥ {}",
            format_thousands(card.downloads),
            format_thousands(card.likes)
        )?;

        if verbose {
            writeln!(f, "  {}", card.url.blue().underline())?;
            if let Some(modified) = &card.last_modified {
                writeln!(f, "  {}", modified.dimmed())?;
            }
        }
        Ok(())
    }

    fn render_pagination(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = &self.data.pagination;
        let prev = if p.prev_disabled { "‹".dimmed().to_string() } else { "‹".to_string() };
        let next = if p.next_disabled { "›".dimmed().to_string() } else { "›".to_string() };
        writeln!(f, "\n{} {} {}", prev, p.label, next)
    }
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f, false),
            ViewMode::Verbose => self.render_standard(f, true),
        }
    }
}

// --------------------------------------------------------
// Filter options
// --------------------------------------------------------

impl CreateView for FilterOptionsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FilterOptionsView { data: self, mode })
    }
}

pub struct FilterOptionsView<'a> {
    data: &'a FilterOptionsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for FilterOptionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = &self.data.messages;

        match self.mode {
            ViewMode::Minimal => {
                for author in &self.data.authors {
                    writeln!(f, "author\t{}", author)?;
                }
                for task in &self.data.tasks {
                    writeln!(f, "task\t{}", task)?;
                }
            }
            ViewMode::Compact => {
                writeln!(f, "{}: {}", m.get("filters.authors"), self.data.authors.join(", "))?;
                writeln!(f, "{}: {}", m.get("filters.tasks"), self.data.tasks.join(", "))?;
            }
            ViewMode::Standard | ViewMode::Verbose => {
                for (title, values) in [
                    (m.get("filters.authors"), &self.data.authors),
                    (m.get("filters.tasks"), &self.data.tasks),
                ] {
                    writeln!(f, "{} ({})", title.bold(), values.len())?;
                    writeln!(f, "  {}", m.get("filters.any").dimmed())?;
                    for value in values {
                        writeln!(f, "  {}", value)?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// CSV export
// --------------------------------------------------------

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView { data: self, mode })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            writeln!(f, "{}", self.data.path)?;
        }
        Ok(())
    }
}
