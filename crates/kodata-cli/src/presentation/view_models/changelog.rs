use serde::Serialize;

use crate::i18n::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Downloads,
    Likes,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub tone: BadgeTone,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    New,
    Removed,
    Updated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangelogItem {
    pub kind: ChangeKind,
    pub id: String,
    pub url: String,
    /// Author, or the localized "Unknown"
    pub author: String,
    pub badges: Vec<Badge>,
    /// Description cut to 200 characters; absent for updated entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogSummary {
    pub new_count: u64,
    pub removed_count: u64,
    pub updated_count: u64,
    pub unchanged_count: u64,
    pub net_change: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangelogViewModel {
    /// `YYYY-MM-DD` when the source date is well formed, the raw value otherwise
    pub previous_date: String,
    pub current_date: String,
    pub previous_count: u64,
    pub current_count: u64,
    pub summary: ChangelogSummary,
    pub new_datasets: Vec<ChangelogItem>,
    pub updated_datasets: Vec<ChangelogItem>,
    pub removed_datasets: Vec<ChangelogItem>,

    #[serde(skip)]
    pub messages: Messages,
}
