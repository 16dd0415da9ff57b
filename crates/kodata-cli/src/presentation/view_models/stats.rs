use serde::Serialize;

use crate::i18n::Messages;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}

/// Collector aggregates, passed through unchanged
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsPanel {
    pub total_datasets: u64,
    pub total_downloads: u64,
    pub total_likes: u64,
    pub multilingual_count: u64,
    pub top_authors: Vec<RankedEntry>,
    pub top_tasks: Vec<RankedEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub panel: StatisticsPanel,

    #[serde(skip)]
    pub messages: Messages,
}
