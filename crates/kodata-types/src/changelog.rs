use serde::{Deserialize, Serialize};

use crate::catalog::{Dataset, null_as_default};

/// `data/changelog.json`: differences between the two most recent catalog snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub generated_at: Option<String>,

    /// `YYYYMMDD`
    pub previous_date: String,

    /// `YYYYMMDD`
    pub current_date: String,

    #[serde(default)]
    pub previous_count: u64,

    #[serde(default)]
    pub current_count: u64,

    pub summary: ChangeSummary,

    pub changes: ChangeBuckets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    #[serde(default)]
    pub new_count: u64,

    #[serde(default)]
    pub removed_count: u64,

    #[serde(default)]
    pub updated_count: u64,

    #[serde(default)]
    pub unchanged_count: u64,

    #[serde(default)]
    pub net_change: Option<i64>,
}

impl ChangeSummary {
    /// Net change as published, or new minus removed when the field is absent
    pub fn net_change(&self) -> i64 {
        self.net_change
            .unwrap_or(self.new_count as i64 - self.removed_count as i64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeBuckets {
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_datasets: Vec<Dataset>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub removed_datasets: Vec<Dataset>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_datasets: Vec<UpdatedDataset>,

    #[serde(default)]
    pub unchanged_count: u64,
}

/// A dataset present in both snapshots whose stats or description moved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedDataset {
    pub id: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub url: String,

    pub changes: FieldChanges,
}

impl UpdatedDataset {
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldChanges {
    #[serde(default)]
    pub downloads: CounterChange,

    #[serde(default)]
    pub likes: CounterChange,

    #[serde(default)]
    pub description_changed: bool,
}

/// Before/after pair for a counter. `change` is `current - previous`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterChange {
    #[serde(default)]
    pub previous: u64,

    #[serde(default)]
    pub current: u64,

    #[serde(default)]
    pub change: i64,
}

impl CounterChange {
    pub fn new(previous: u64, current: u64) -> Self {
        Self {
            previous,
            current,
            change: current as i64 - previous as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_changelog_document() {
        let changelog: Changelog = serde_json::from_value(json!({
            "generated_at": "2024-01-15T03:00:00",
            "previous_date": "20240108",
            "current_date": "20240115",
            "previous_count": 10,
            "current_count": 11,
            "summary": {
                "new_count": 2,
                "removed_count": 1,
                "updated_count": 1,
                "unchanged_count": 8
            },
            "changes": {
                "new_datasets": [{ "id": "a/new", "downloads": 5, "likes": 0 }],
                "removed_datasets": [],
                "updated_datasets": [{
                    "id": "b/upd",
                    "author": "b",
                    "url": "https://huggingface.co/datasets/b/upd",
                    "changes": {
                        "downloads": { "previous": 10, "current": 30, "change": 20 },
                        "likes": { "previous": 3, "current": 3, "change": 0 },
                        "description_changed": true
                    }
                }],
                "unchanged_count": 8
            }
        }))
        .unwrap();

        assert_eq!(changelog.changes.new_datasets.len(), 1);
        assert_eq!(changelog.changes.updated_datasets[0].changes.downloads.change, 20);
        assert!(changelog.changes.updated_datasets[0].changes.description_changed);
        assert_eq!(changelog.summary.net_change(), 1);
    }

    #[test]
    fn test_published_net_change_wins() {
        let summary = ChangeSummary {
            new_count: 1,
            removed_count: 0,
            net_change: Some(-4),
            ..Default::default()
        };
        assert_eq!(summary.net_change(), -4);
    }

    #[test]
    fn test_counter_change_new() {
        let change = CounterChange::new(20, 15);
        assert_eq!(change.change, -5);
    }
}
