use serde::Serialize;

use super::stats::StatisticsPanel;
use crate::i18n::Messages;

/// One catalog entry as displayed
#[derive(Debug, Clone, Serialize)]
pub struct DatasetCard {
    pub id: String,
    /// Author, or the localized "Unknown"
    pub author: String,
    /// Description cut to 150 characters, or the localized placeholder
    pub body: String,
    pub has_description: bool,
    /// At most three
    pub languages: Vec<String>,
    /// At most two
    pub tasks: Vec<String>,
    /// Entries cut from `languages`/`tasks`, kept for the verbose view
    pub more_languages: Vec<String>,
    pub more_tasks: Vec<String>,
    pub downloads: u64,
    pub likes: u64,
    pub url: String,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControl {
    pub page: usize,
    pub total_pages: usize,
    /// `"{page} / {total_pages}"`
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Active filters and sort, echoed back so JSON consumers see what produced the page
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogViewModel {
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatisticsPanel>,
    pub query: CatalogQuery,
    pub match_count: usize,
    pub cards: Vec<DatasetCard>,
    pub pagination: PaginationControl,

    #[serde(skip)]
    pub messages: Messages,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptionsViewModel {
    pub authors: Vec<String>,
    pub tasks: Vec<String>,

    #[serde(skip)]
    pub messages: Messages,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportViewModel {
    pub path: String,
    pub rows: usize,
}
