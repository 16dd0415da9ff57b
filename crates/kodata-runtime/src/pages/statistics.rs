use kodata_types::{Statistics, StatisticsDocument};

use super::Page;
use crate::error::LoadError;
use crate::loader::{RESOURCE_STATISTICS, load};
use crate::source::SnapshotSource;

#[derive(Debug, Clone)]
pub struct StatisticsPage {
    document: StatisticsDocument,
}

impl StatisticsPage {
    pub fn new(document: StatisticsDocument) -> Self {
        Self { document }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.document.statistics
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.document.last_updated.as_deref()
    }
}

impl Page for StatisticsPage {
    const NAME: &'static str = "statistics";

    fn load(source: &dyn SnapshotSource) -> Result<Self, LoadError> {
        load(source, RESOURCE_STATISTICS).map(Self::new)
    }
}
