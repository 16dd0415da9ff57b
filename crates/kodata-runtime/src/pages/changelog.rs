use kodata_types::Changelog;

use super::Page;
use crate::error::LoadError;
use crate::loader::{RESOURCE_CHANGELOG, load};
use crate::source::SnapshotSource;

/// The changelog is displayed as published; there is nothing to recompute.
#[derive(Debug, Clone)]
pub struct ChangelogPage {
    changelog: Changelog,
}

impl ChangelogPage {
    pub fn new(changelog: Changelog) -> Self {
        Self { changelog }
    }

    pub fn changelog(&self) -> &Changelog {
        &self.changelog
    }
}

impl Page for ChangelogPage {
    const NAME: &'static str = "changelog";

    fn load(source: &dyn SnapshotSource) -> Result<Self, LoadError> {
        load(source, RESOURCE_CHANGELOG).map(Self::new)
    }
}
