use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One Hugging Face dataset entry from the catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub last_modified: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub size_categories: Vec<String>,
}

impl Dataset {
    /// Minimal record, mostly useful for building fixtures
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            url: format!("https://huggingface.co/datasets/{}", id),
            id,
            author: None,
            description: None,
            languages: Vec::new(),
            tasks: Vec::new(),
            downloads: 0,
            likes: 0,
            last_modified: None,
            created_at: None,
            tags: Vec::new(),
            size_categories: Vec::new(),
        }
    }

    /// Author name, treating the collector's empty string as absent
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// Description text, treating the collector's empty string as absent
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn is_multilingual(&self) -> bool {
        self.languages.len() > 1
    }
}

/// `data/korean_datasets.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub last_updated: String,

    #[serde(default)]
    pub total_count: Option<u64>,

    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// `data/statistics.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsDocument {
    #[serde(default)]
    pub last_updated: Option<String>,

    pub statistics: Statistics,
}

/// Collector-side aggregates. Displayed as-is, never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_datasets: u64,

    #[serde(default)]
    pub total_downloads: u64,

    #[serde(default)]
    pub total_likes: u64,

    #[serde(default)]
    pub multilingual_count: u64,

    #[serde(default)]
    pub top_authors: BTreeMap<String, u64>,

    #[serde(default)]
    pub top_tasks: BTreeMap<String, u64>,
}

/// Maps an explicit JSON `null` to the type's default, the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
