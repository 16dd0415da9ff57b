//! Changelog tab: one scrollable column of sections.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::Messages;
use crate::presentation::formatters::{format_signed, format_thousands};
use crate::presentation::view_models::{ChangelogItem, ChangelogViewModel, PanelState};
use crate::presentation::views::tui::{
    clamp_scroll, loading_paragraph, notice_paragraph, tone_to_color,
};

pub struct ChangelogComponent {
    scroll: u16,
}

impl ChangelogComponent {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Returns true when the key was consumed
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            _ => return false,
        }
        true
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &PanelState<ChangelogViewModel>,
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

        let lines = changelog_lines(data, messages);
        self.scroll = clamp_scroll(self.scroll, lines.len());

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl Default for ChangelogComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn changelog_lines<'a>(data: &'a ChangelogViewModel, messages: &Messages) -> Vec<Line<'a>> {
    let s = &data.summary;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(messages.format(
            "changelog.period",
            &[
                ("previous", &data.previous_date),
                ("current", &data.current_date),
                ("previous_count", &format_thousands(data.previous_count)),
                ("current_count", &format_thousands(data.current_count)),
            ],
        )),
        Line::default(),
        Line::from(vec![
            Span::raw(format!("{} ", messages.get("changelog.new"))),
            Span::styled(s.new_count.to_string(), Style::default().fg(Color::Green)),
            Span::raw(format!("   {} ", messages.get("changelog.removed"))),
            Span::styled(s.removed_count.to_string(), Style::default().fg(Color::Red)),
            Span::raw(format!("   {} ", messages.get("changelog.updated"))),
            Span::styled(s.updated_count.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw(format!("   {} {}", messages.get("changelog.unchanged"), s.unchanged_count)),
        ]),
        Line::from(vec![
            Span::raw(format!("{} ", messages.get("changelog.net"))),
            Span::styled(format_signed(s.net_change), bold),
        ]),
    ];

    for (key, items) in [
        ("changelog.new", &data.new_datasets),
        ("changelog.updated", &data.updated_datasets),
        ("changelog.removed", &data.removed_datasets),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{} ({})", messages.get(key), items.len()),
            bold,
        ));
        for item in items {
            push_item(&mut lines, item, messages);
        }
    }

    lines
}

fn push_item<'a>(lines: &mut Vec<Line<'a>>, item: &'a ChangelogItem, messages: &Messages) {
    lines.push(Line::styled(
        format!("  {}", item.id),
        Style::default().fg(Color::Cyan),
    ));
    lines.push(Line::styled(
        format!("    {}", messages.format("changelog.author", &[("author", &item.author)])),
        Style::default().fg(Color::DarkGray),
    ));

    if !item.badges.is_empty() {
        let mut spans = vec![Span::raw("    ")];
        for badge in &item.badges {
            spans.push(Span::styled(
                format!("[{}] ", badge.label),
                Style::default().fg(tone_to_color(badge.tone)),
            ));
        }
        lines.push(Line::from(spans));
    }
    if let Some(description) = &item.description {
        lines.push(Line::from(format!("    {}", description)));
    }
}
