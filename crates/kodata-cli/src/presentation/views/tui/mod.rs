//! Dashboard views.
//!
//! Components own their UI state (scroll offset, edit buffer), handle keys and
//! clamp indices before drawing. They read view models only; anything that
//! changes the catalog query goes back to the controller as an action.

pub mod components;

pub use components::{CatalogAction, CatalogComponent, ChangelogComponent, TrendsComponent};

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::Messages;
use crate::presentation::view_models::{BadgeTone, NoticeViewModel, StatusLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Catalog,
    Changelog,
    Trends,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Catalog, Tab::Changelog, Tab::Trends];

    pub fn title_key(self) -> &'static str {
        match self {
            Tab::Catalog => "tab.catalog",
            Tab::Changelog => "tab.changelog",
            Tab::Trends => "tab.trends",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Catalog => 0,
            Tab::Changelog => 1,
            Tab::Trends => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn tone_to_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Positive => Color::Green,
        BadgeTone::Negative => Color::Red,
        BadgeTone::Neutral => Color::Gray,
    }
}

pub(crate) fn loading_paragraph(messages: &Messages) -> Paragraph<'static> {
    Paragraph::new(messages.get("tui.loading").to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
}

pub(crate) fn notice_paragraph(notice: &NoticeViewModel) -> Paragraph<'_> {
    Paragraph::new(Line::from(notice.message.as_str()))
        .style(Style::default().fg(status_level_to_color(StatusLevel::Warning)))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL))
}

/// Clamp a scroll offset so at least the last line stays visible
pub(crate) fn clamp_scroll(scroll: u16, line_count: usize) -> u16 {
    let max = line_count.saturating_sub(1).min(u16::MAX as usize) as u16;
    scroll.min(max)
}
