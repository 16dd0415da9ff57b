use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use kodata_engine::SortKey;
use kodata_runtime::{CatalogPage, ChangelogPage, LoadError, Page, PageState, TrendsPage};

use super::HandlerContext;
use crate::i18n::Messages;
use crate::presentation::presenters;
use crate::presentation::view_models::{
    CatalogViewModel, ChangelogViewModel, NoticeViewModel, PanelState, TrendsViewModel,
};
use crate::presentation::views::tui::{CatalogAction, Tab};
use crate::presentation::{Dashboard, TuiRenderer};

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `kodata catalog` for piped output");
    }

    let mut controller = BrowseController::new(ctx);
    TuiRenderer::run(&mut controller)
}

/// Page controller for the dashboard. Each tab's page loads on first visit.
pub struct BrowseController<'a> {
    ctx: &'a HandlerContext,
    catalog: PageState<CatalogPage>,
    changelog: PageState<ChangelogPage>,
    trends: PageState<TrendsPage>,
}

impl<'a> BrowseController<'a> {
    pub fn new(ctx: &'a HandlerContext) -> Self {
        Self {
            ctx,
            catalog: PageState::Loading,
            changelog: PageState::Loading,
            trends: PageState::Loading,
        }
    }

    fn panel<P: Page, T>(
        &self,
        state: &PageState<P>,
        present: impl FnOnce(&P) -> T,
    ) -> PanelState<T> {
        match state {
            PageState::Loading => PanelState::Loading,
            PageState::Ready(page) => PanelState::Ready(present(page)),
            PageState::Failed(err) => PanelState::Failed(self.notice(P::NAME, err)),
        }
    }

    fn notice(&self, page: &'static str, err: &LoadError) -> NoticeViewModel {
        tracing::debug!(page, resource = err.resource(), "showing fallback");
        presenters::notice(page, &self.ctx.messages)
    }
}

impl Dashboard for BrowseController<'_> {
    fn messages(&self) -> Messages {
        self.ctx.messages
    }

    fn open(&mut self, tab: Tab) {
        let source = self.ctx.source();
        match tab {
            Tab::Catalog => self.catalog.resolve(source),
            Tab::Changelog => self.changelog.resolve(source),
            Tab::Trends => self.trends.resolve(source),
        }
    }

    fn catalog(&self) -> PanelState<CatalogViewModel> {
        let messages = self.ctx.messages;
        self.panel(&self.catalog, |page| {
            presenters::present_catalog(page, messages).content
        })
    }

    fn changelog(&self) -> PanelState<ChangelogViewModel> {
        let messages = self.ctx.messages;
        self.panel(&self.changelog, |page| {
            presenters::present_changelog(page.changelog(), messages).content
        })
    }

    fn trends(&self) -> PanelState<TrendsViewModel> {
        let messages = self.ctx.messages;
        self.panel(&self.trends, |page| {
            presenters::present_trends(page.trend(), page.generated_at(), messages).content
        })
    }

    fn apply(&mut self, action: CatalogAction) {
        let Some(catalog) = self.catalog.ready_mut() else {
            return;
        };

        match action {
            CatalogAction::Search(term) => catalog.set_search(term),
            CatalogAction::CycleAuthor => {
                let next = cycle(&catalog.options().authors, catalog.criteria().author.as_deref());
                catalog.set_author(next.unwrap_or_default());
            }
            CatalogAction::CycleTask => {
                let next = cycle(&catalog.options().tasks, catalog.criteria().task.as_deref());
                catalog.set_task(next.unwrap_or_default());
            }
            CatalogAction::CycleSort => {
                let next = cycle_sort(catalog.sort());
                catalog.set_sort(next);
            }
            CatalogAction::NextPage => catalog.next_page(),
            CatalogAction::PrevPage => catalog.prev_page(),
        }
    }
}

/// `None -> first -> ... -> last -> None`
fn cycle(options: &[String], current: Option<&str>) -> Option<String> {
    let next = match current {
        None => options.first(),
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .and_then(|i| options.get(i + 1)),
    };
    next.cloned()
}

fn cycle_sort(current: Option<SortKey>) -> Option<SortKey> {
    let keys: &'static [SortKey] = &SortKey::ALL;
    match current {
        None => keys.first().copied(),
        Some(key) => keys
            .iter()
            .position(|&k| k == key)
            .and_then(|i| keys.get(i + 1))
            .copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_through_none() {
        let options = vec!["a".to_string(), "b".to_string()];

        assert_eq!(cycle(&options, None).as_deref(), Some("a"));
        assert_eq!(cycle(&options, Some("a")).as_deref(), Some("b"));
        assert_eq!(cycle(&options, Some("b")), None);
        assert_eq!(cycle(&[], None), None);
    }

    #[test]
    fn test_sort_cycle_visits_every_key() {
        let mut seen = Vec::new();
        let mut key = cycle_sort(None);
        while let Some(k) = key {
            seen.push(k);
            key = cycle_sort(Some(k));
        }
        assert_eq!(seen, SortKey::ALL.to_vec());
    }
}
