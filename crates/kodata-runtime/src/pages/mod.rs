//! Per-page state objects.
//!
//! Each page owns its canonical snapshot for the whole session. Loading happens
//! exactly once through [`PageState::open`]; every later interaction recomputes
//! derived data locally.

mod catalog;
mod changelog;
mod statistics;
mod trends;

pub use catalog::{CatalogPage, CatalogView};
pub use changelog::ChangelogPage;
pub use statistics::StatisticsPage;
pub use trends::TrendsPage;

use crate::error::LoadError;
use crate::source::SnapshotSource;

/// A page that can be built from snapshot documents
pub trait Page: Sized {
    /// Short name used in logs
    const NAME: &'static str;

    fn load(source: &dyn SnapshotSource) -> Result<Self, LoadError>;
}

/// `Loading -> Ready | Failed`. Both outcomes are terminal.
#[derive(Debug)]
pub enum PageState<P> {
    Loading,
    Ready(P),
    Failed(LoadError),
}

impl<P: Page> PageState<P> {
    pub fn open(source: &dyn SnapshotSource) -> Self {
        let mut state = PageState::Loading;
        state.resolve(source);
        state
    }

    /// Perform the single load. No-op once the page has left `Loading`.
    pub fn resolve(&mut self, source: &dyn SnapshotSource) {
        if !matches!(self, PageState::Loading) {
            return;
        }

        *self = match P::load(source) {
            Ok(page) => {
                tracing::debug!(page = P::NAME, "page ready");
                PageState::Ready(page)
            }
            Err(err) => {
                tracing::warn!(page = P::NAME, error = %err, "page failed to load");
                PageState::Failed(err)
            }
        };
    }
}

impl<P> PageState<P> {
    pub fn ready(&self) -> Option<&P> {
        match self {
            PageState::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut P> {
        match self {
            PageState::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            PageState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }
}
