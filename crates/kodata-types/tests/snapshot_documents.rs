use kodata_types::*;

const CATALOG: &str = r#"{
  "last_updated": "2024-01-15T03:12:45.123456",
  "total_count": 2,
  "datasets": [
    {
      "id": "beomi/KoAlpaca-v1.1a",
      "author": "beomi",
      "created_at": "2023-04-01 10:00:00+00:00",
      "last_modified": "2023-11-20 08:30:00+00:00",
      "downloads": 15234,
      "likes": 120,
      "tags": ["language:ko", "task_categories:text-generation", "size_categories:10K<n<100K"],
      "description": "",
      "url": "https://huggingface.co/datasets/beomi/KoAlpaca-v1.1a",
      "languages": ["ko"],
      "tasks": ["text-generation"],
      "size_categories": ["10K<n<100K"]
    },
    {
      "id": "someone/ko-en-parallel",
      "author": null,
      "created_at": null,
      "last_modified": null,
      "downloads": 0,
      "likes": 0,
      "tags": [],
      "description": "Korean-English parallel corpus",
      "url": "https://huggingface.co/datasets/someone/ko-en-parallel",
      "languages": ["ko", "en"],
      "tasks": ["translation"],
      "size_categories": []
    }
  ]
}"#;

#[test]
fn test_collector_catalog_document_parses() {
    let snapshot: CatalogSnapshot = serde_json::from_str(CATALOG).unwrap();

    assert_eq!(snapshot.total_count, Some(2));
    assert_eq!(snapshot.datasets.len(), 2);

    let first = &snapshot.datasets[0];
    assert_eq!(first.author(), Some("beomi"));
    assert!(first.description().is_none());
    assert!(!first.is_multilingual());

    let second = &snapshot.datasets[1];
    assert!(second.author().is_none());
    assert_eq!(second.description(), Some("Korean-English parallel corpus"));
    assert!(second.is_multilingual());
}

#[test]
fn test_statistics_document_with_top_lists() {
    let doc: StatisticsDocument = serde_json::from_str(
        r#"{
          "last_updated": "2024-01-15T03:12:45",
          "statistics": {
            "total_datasets": 2,
            "total_downloads": 15234,
            "total_likes": 120,
            "top_authors": {"beomi": 1, "unknown": 1},
            "top_tasks": {"text-generation": 1, "translation": 1},
            "multilingual_count": 1
          }
        }"#,
    )
    .unwrap();

    assert_eq!(doc.statistics.multilingual_count, 1);
    assert_eq!(doc.statistics.top_authors.get("beomi"), Some(&1));
}

#[test]
fn test_malformed_trend_is_detected_after_parse() {
    let doc: TrendsDocument = serde_json::from_str(
        r#"{"trends": {"dates": ["20240101", "20240108"], "total_datasets": [1, 2],
            "total_downloads": [1, 2], "total_likes": [1], "multilingual_count": [0, 1]}}"#,
    )
    .unwrap();

    assert!(doc.trends.validate().is_err());
}
