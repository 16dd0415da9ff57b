//! Catalog tab: query line, dataset cards, pagination.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::Messages;
use crate::presentation::formatters::format_thousands;
use crate::presentation::view_models::{CatalogViewModel, DatasetCard, PanelState};
use crate::presentation::views::tui::{clamp_scroll, loading_paragraph, notice_paragraph};

/// Requests the catalog component sends to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    Search(String),
    CycleAuthor,
    CycleTask,
    CycleSort,
    NextPage,
    PrevPage,
}

pub struct CatalogComponent {
    /// Search buffer while the user is typing
    editing: Option<String>,
    scroll: u16,
}

impl CatalogComponent {
    pub fn new() -> Self {
        Self {
            editing: None,
            scroll: 0,
        }
    }

    /// While typing, global keys (quit, tab switch) belong to the input
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data: Option<&CatalogViewModel>,
    ) -> Option<CatalogAction> {
        if let Some(buffer) = self.editing.as_mut() {
            match key.code {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let term = self.editing.take().unwrap_or_default();
                    self.scroll = 0;
                    return Some(CatalogAction::Search(term));
                }
                KeyCode::Esc => self.editing = None,
                _ => {}
            }
            return None;
        }

        // Nothing to act on until the page is ready
        let data = data?;

        match key.code {
            KeyCode::Char('/') => {
                self.editing = Some(data.query.search.clone().unwrap_or_default());
                None
            }
            KeyCode::Char('a') => self.reset_with(CatalogAction::CycleAuthor),
            KeyCode::Char('t') => self.reset_with(CatalogAction::CycleTask),
            KeyCode::Char('s') => self.reset_with(CatalogAction::CycleSort),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.reset_with(CatalogAction::NextPage)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.reset_with(CatalogAction::PrevPage)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Home => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }

    fn reset_with(&mut self, action: CatalogAction) -> Option<CatalogAction> {
        self.scroll = 0;
        Some(action)
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &PanelState<CatalogViewModel>,
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

        let chunks = Layout::vertical([
            Constraint::Length(4), // last updated, totals, query
            Constraint::Min(5),    // cards
            Constraint::Length(1), // pagination or search input
        ])
        .split(area);

        f.render_widget(header(data, messages), chunks[0]);

        let lines = card_lines(data, messages);
        self.scroll = clamp_scroll(self.scroll, lines.len());
        let cards = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
        f.render_widget(cards, chunks[1]);

        let footer = match &self.editing {
            Some(buffer) => Line::from(vec![
                Span::styled(
                    format!("{}: ", messages.get("tui.search")),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(buffer.clone()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("   {}", messages.get("tui.editing")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            None => pagination_line(data),
        };
        f.render_widget(Paragraph::new(footer), chunks[2]);
    }
}

impl Default for CatalogComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn header<'a>(data: &'a CatalogViewModel, messages: &Messages) -> Paragraph<'a> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::styled(
        messages.format("catalog.last_updated", &[("date", &data.last_updated)]),
        dim,
    )];

    if let Some(panel) = &data.statistics {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", messages.get("stats.total_datasets"))),
            Span::styled(format_thousands(panel.total_datasets), bold()),
            Span::raw(format!("  {} ", messages.get("stats.total_downloads"))),
            Span::styled(format_thousands(panel.total_downloads), bold()),
            Span::raw(format!("  {} ", messages.get("stats.total_likes"))),
            Span::styled(format_thousands(panel.total_likes), bold()),
            Span::raw(format!("  {} ", messages.get("stats.multilingual"))),
            Span::styled(format_thousands(panel.multilingual_count), bold()),
        ]));
    }

    let any = messages.get("filters.any");
    let query = &data.query;
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", messages.get("tui.search")), dim),
        Span::raw(query.search.as_deref().unwrap_or(any).to_string()),
        Span::styled(format!("  {}: ", messages.get("filters.authors")), dim),
        Span::raw(query.author.as_deref().unwrap_or(any).to_string()),
        Span::styled(format!("  {}: ", messages.get("filters.tasks")), dim),
        Span::raw(query.task.as_deref().unwrap_or(any).to_string()),
        Span::styled(format!("  {}: ", messages.get("tui.sort")), dim),
        Span::raw(
            query
                .sort
                .as_deref()
                .unwrap_or(messages.get("tui.sort_default"))
                .to_string(),
        ),
    ]));
    lines.push(Line::styled(
        messages.format("catalog.matches", &[("count", &data.match_count.to_string())]),
        Style::default().fg(Color::Green),
    ));

    Paragraph::new(lines)
}

fn card_lines<'a>(data: &'a CatalogViewModel, messages: &Messages) -> Vec<Line<'a>> {
    if data.cards.is_empty() {
        return vec![Line::styled(
            messages.get("catalog.empty").to_string(),
            Style::default().fg(Color::DarkGray),
        )];
    }

    let mut lines = Vec::new();
    for card in &data.cards {
        push_card(&mut lines, card, messages);
        lines.push(Line::default());
    }
    lines
}

fn push_card<'a>(lines: &mut Vec<Line<'a>>, card: &'a DatasetCard, messages: &Messages) {
    lines.push(Line::styled(card.id.as_str(), bold().fg(Color::Cyan)));
    lines.push(Line::styled(
        messages.format("dataset.by", &[("author", &card.author)]),
        Style::default().fg(Color::DarkGray),
    ));

    let body_style = if card.has_description {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::styled(card.body.as_str(), body_style));

    let mut tags: Vec<Span> = Vec::new();
    for language in &card.languages {
        tags.push(Span::styled(
            format!("[{}] ", language),
            Style::default().fg(Color::Magenta),
        ));
    }
    for task in &card.tasks {
        tags.push(Span::styled(format!("<{}> ", task), Style::default().fg(Color::Blue)));
    }
    if !tags.is_empty() {
        lines.push(Line::from(tags));
    }

    lines.push(Line::from(format!(
        "↓ {}  ♥ {}",
        format_thousands(card.downloads),
        format_thousands(card.likes)
    )));
}

fn pagination_line(data: &CatalogViewModel) -> Line<'_> {
    let p = &data.pagination;
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("‹ ", if p.prev_disabled { disabled } else { enabled }),
        Span::raw(p.label.as_str()),
        Span::styled(" ›", if p.next_disabled { disabled } else { enabled }),
    ])
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_model() -> CatalogViewModel {
        use crate::presentation::presenters::present_pagination;
        use crate::presentation::view_models::CatalogQuery;

        CatalogViewModel {
            last_updated: "2024-01-01".to_string(),
            statistics: None,
            query: CatalogQuery {
                search: Some("ko".to_string()),
                ..CatalogQuery::default()
            },
            match_count: 0,
            cards: Vec::new(),
            pagination: present_pagination(1, 0),
            messages: Messages::default(),
        }
    }

    #[test]
    fn test_search_editing_starts_from_current_term() {
        let vm = view_model();
        let mut component = CatalogComponent::new();

        assert_eq!(component.handle_input(key(KeyCode::Char('/')), Some(&vm)), None);
        assert!(component.is_editing());

        component.handle_input(key(KeyCode::Char('r')), Some(&vm));
        component.handle_input(key(KeyCode::Backspace), Some(&vm));
        component.handle_input(key(KeyCode::Char('x')), Some(&vm));

        let action = component.handle_input(key(KeyCode::Enter), Some(&vm));
        assert_eq!(action, Some(CatalogAction::Search("kox".to_string())));
        assert!(!component.is_editing());
    }

    #[test]
    fn test_escape_cancels_editing() {
        let vm = view_model();
        let mut component = CatalogComponent::new();

        component.handle_input(key(KeyCode::Char('/')), Some(&vm));
        assert_eq!(component.handle_input(key(KeyCode::Esc), Some(&vm)), None);
        assert!(!component.is_editing());
    }

    #[test]
    fn test_keys_map_to_actions() {
        let vm = view_model();
        let mut component = CatalogComponent::new();

        assert_eq!(
            component.handle_input(key(KeyCode::Right), Some(&vm)),
            Some(CatalogAction::NextPage)
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('a')), Some(&vm)),
            Some(CatalogAction::CycleAuthor)
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('s')), Some(&vm)),
            Some(CatalogAction::CycleSort)
        );
    }

    #[test]
    fn test_no_actions_before_ready() {
        let mut component = CatalogComponent::new();
        assert_eq!(component.handle_input(key(KeyCode::Right), None), None);
    }
}
