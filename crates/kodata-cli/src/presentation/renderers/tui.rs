use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::i18n::Messages;
use crate::presentation::view_models::{
    CatalogViewModel, ChangelogViewModel, PanelState, TrendsViewModel,
};
use crate::presentation::views::tui::{
    CatalogAction, CatalogComponent, ChangelogComponent, Tab, TrendsComponent,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Controller side of the dashboard: owns the pages, hands out view models
pub trait Dashboard {
    fn messages(&self) -> Messages;

    /// Load the page behind `tab` if it has not been loaded yet
    fn open(&mut self, tab: Tab);

    fn catalog(&self) -> PanelState<CatalogViewModel>;
    fn changelog(&self) -> PanelState<ChangelogViewModel>;
    fn trends(&self) -> PanelState<TrendsViewModel>;

    fn apply(&mut self, action: CatalogAction);
}

/// View models for every tab, rebuilt after each load or query change
struct Screen {
    catalog: PanelState<CatalogViewModel>,
    changelog: PanelState<ChangelogViewModel>,
    trends: PanelState<TrendsViewModel>,
}

impl Screen {
    fn from_dashboard<D: Dashboard>(dashboard: &D) -> Self {
        Self {
            catalog: dashboard.catalog(),
            changelog: dashboard.changelog(),
            trends: dashboard.trends(),
        }
    }

    fn is_loading(&self, tab: Tab) -> bool {
        match tab {
            Tab::Catalog => matches!(self.catalog, PanelState::Loading),
            Tab::Changelog => matches!(self.changelog, PanelState::Loading),
            Tab::Trends => matches!(self.trends, PanelState::Loading),
        }
    }
}

struct App {
    tab: Tab,
    catalog: CatalogComponent,
    changelog: ChangelogComponent,
    trends: TrendsComponent,
}

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

pub struct TuiRenderer;

impl TuiRenderer {
    pub fn run<D: Dashboard>(dashboard: &mut D) -> Result<()> {
        let messages = dashboard.messages();
        let mut guard = TerminalGuard::enter()?;

        let mut app = App {
            tab: Tab::Catalog,
            catalog: CatalogComponent::new(),
            changelog: ChangelogComponent::new(),
            trends: TrendsComponent::new(),
        };
        let mut screen = Screen::from_dashboard(dashboard);

        loop {
            guard
                .terminal
                .draw(|f| draw(f, &mut app, &screen, &messages))?;

            // The loading frame is on screen; now do the one fetch for this tab
            if screen.is_loading(app.tab) {
                dashboard.open(app.tab);
                screen = Screen::from_dashboard(dashboard);
                continue;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            if !(app.tab == Tab::Catalog && app.catalog.is_editing()) {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Tab => {
                        app.tab = app.tab.next();
                        continue;
                    }
                    KeyCode::BackTab => {
                        app.tab = app.tab.previous();
                        continue;
                    }
                    KeyCode::Char('1') => {
                        app.tab = Tab::Catalog;
                        continue;
                    }
                    KeyCode::Char('2') => {
                        app.tab = Tab::Changelog;
                        continue;
                    }
                    KeyCode::Char('3') => {
                        app.tab = Tab::Trends;
                        continue;
                    }
                    _ => {}
                }
            }

            match app.tab {
                Tab::Catalog => {
                    let ready = match &screen.catalog {
                        PanelState::Ready(data) => Some(data),
                        _ => None,
                    };
                    if let Some(action) = app.catalog.handle_input(key, ready) {
                        tracing::debug!(?action, "catalog action");
                        dashboard.apply(action);
                        screen.catalog = dashboard.catalog();
                    }
                }
                Tab::Changelog => {
                    app.changelog.handle_input(key);
                }
                Tab::Trends => {}
            }
        }

        Ok(())
    }
}

fn draw(f: &mut Frame, app: &mut App, screen: &Screen, messages: &Messages) {
    let [tabs_area, body, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(messages.get(tab.title_key())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, tabs_area);

    match app.tab {
        Tab::Catalog => app.catalog.render(f, body, &screen.catalog, messages),
        Tab::Changelog => app.changelog.render(f, body, &screen.changelog, messages),
        Tab::Trends => app.trends.render(f, body, &screen.trends, messages),
    }

    let help = Paragraph::new(messages.get("tui.help"))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, help_area);
}
