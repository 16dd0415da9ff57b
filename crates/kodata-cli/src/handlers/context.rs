use anyhow::{Context, Result};
use kodata_runtime::{LoadError, Page, PageState, SnapshotSource};
use serde::Serialize;

use crate::config::Settings;
use crate::i18n::Messages;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};

/// Everything a handler needs: where the snapshots live and how to print
pub struct HandlerContext {
    source: Box<dyn SnapshotSource>,
    pub messages: Messages,
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(settings: &Settings) -> Result<Self> {
        let source = settings
            .site
            .open()
            .with_context(|| format!("Failed to open site {}", settings.site))?;
        tracing::debug!(site = %source.describe(), "site opened");

        Ok(Self {
            source,
            messages: settings.messages(),
            format: settings.format,
            view_mode: settings.view,
        })
    }

    pub fn source(&self) -> &dyn SnapshotSource {
        self.source.as_ref()
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.view_mode);
        renderer.render(view_model)
    }

    pub fn render_failure(&self, page: &'static str, error: &LoadError) -> Result<()> {
        self.render(presenters::present_failure(page, error, &self.messages))
    }

    /// Load a page once. On failure the page's fallback is rendered and `None` returned.
    pub fn open_page<P: Page>(&self) -> Result<Option<P>> {
        match PageState::<P>::open(self.source()) {
            PageState::Ready(page) => Ok(Some(page)),
            PageState::Failed(err) => {
                self.render_failure(P::NAME, &err)?;
                Ok(None)
            }
            PageState::Loading => Ok(None),
        }
    }
}
