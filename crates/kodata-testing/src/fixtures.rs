//! Snapshot documents for test sites.
//!
//! Each builder returns a `serde_json::Value` so tests can tweak a field before
//! publishing it.

use serde_json::{Value, json};

pub const CATALOG: &str = "data/korean_datasets.json";
pub const STATISTICS: &str = "data/statistics.json";
pub const CHANGELOG: &str = "data/changelog.json";
pub const TRENDS: &str = "data/trends.json";

/// One catalog record with the fields the CLI displays
pub fn dataset(id: &str, author: Option<&str>, downloads: u64, likes: u64) -> Value {
    json!({
        "id": id,
        "author": author,
        "description": format!("{} description", id),
        "languages": ["ko"],
        "tasks": ["text-classification"],
        "downloads": downloads,
        "likes": likes,
        "last_modified": "2024-01-10T00:00:00",
        "url": format!("https://huggingface.co/datasets/{}", id),
    })
}

/// `count` datasets named `org/dataset-NN`, downloads descending by index
pub fn catalog_of(count: usize) -> Value {
    let datasets: Vec<Value> = (0..count)
        .map(|i| dataset(&format!("org/dataset-{:02}", i), Some("org"), (count - i) as u64 * 10, 1))
        .collect();
    json!({ "last_updated": "2024-01-15T03:12:45", "datasets": datasets })
}

/// Three datasets with distinct authors, tasks and languages
pub fn sample_catalog() -> Value {
    json!({
        "last_updated": "2024-01-15T03:12:45",
        "datasets": [
            {
                "id": "alpha/korean-news",
                "url": "https://huggingface.co/datasets/alpha/korean-news",
                "author": "alpha",
                "description": "Korean news articles for summarization",
                "languages": ["ko", "en"],
                "tasks": ["summarization"],
                "downloads": 5,
                "likes": 20,
                "last_modified": "2024-01-12T10:00:00"
            },
            {
                "id": "beta/qa-pairs",
                "url": "https://huggingface.co/datasets/beta/qa-pairs",
                "author": "beta",
                "description": "",
                "languages": ["ko"],
                "tasks": ["question-answering", "text-generation"],
                "downloads": 20,
                "likes": 20,
                "last_modified": "2023-12-01T00:00:00"
            },
            {
                "id": "gamma/chat",
                "url": "https://huggingface.co/datasets/gamma/chat",
                "author": null,
                "languages": [],
                "tasks": [],
                "downloads": 1200,
                "likes": 3
            }
        ]
    })
}

pub fn sample_statistics() -> Value {
    json!({
        "last_updated": "2024-01-15T03:12:45",
        "statistics": {
            "total_datasets": 3,
            "total_downloads": 1225,
            "total_likes": 43,
            "multilingual_count": 1,
            "top_authors": { "alpha": 1, "beta": 1 },
            "top_tasks": { "summarization": 1, "question-answering": 1 }
        }
    })
}

pub fn sample_changelog() -> Value {
    json!({
        "generated_at": "2024-01-15T03:20:00",
        "previous_date": "20240108",
        "current_date": "20240115",
        "previous_count": 3,
        "current_count": 3,
        "summary": {
            "new_count": 1,
            "removed_count": 1,
            "updated_count": 1,
            "unchanged_count": 1
        },
        "changes": {
            "new_datasets": [
                { "id": "gamma/chat", "downloads": 1200, "likes": 0 }
            ],
            "removed_datasets": [
                { "id": "old/corpus", "author": "old", "downloads": 7, "likes": 2 }
            ],
            "updated_datasets": [
                {
                    "id": "beta/qa-pairs",
                    "author": "beta",
                    "url": "https://huggingface.co/datasets/beta/qa-pairs",
                    "changes": {
                        "downloads": { "previous": 20, "current": 20, "change": 0 },
                        "likes": { "previous": 25, "current": 20, "change": -5 },
                        "description_changed": false
                    }
                }
            ]
        }
    })
}

pub fn sample_trends() -> Value {
    json!({
        "generated_at": "2024-01-15T03:20:00",
        "trends": {
            "dates": ["20240101", "20240108", "20240115"],
            "total_datasets": [100, 200, 300],
            "total_downloads": [1000, 1100, 1225],
            "total_likes": [30, 40, 43],
            "multilingual_count": [25, 25, 25],
            "growth_rate": 12.5,
            "total_weeks": 3,
            "first_date": "20240101",
            "last_date": "20240115"
        }
    })
}
