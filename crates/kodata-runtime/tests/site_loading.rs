use kodata_runtime::{
    CatalogPage, ChangelogPage, FsSource, LoadError, PageState, SiteLocation, StatisticsPage,
    TrendsPage,
};
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, resource: &str, body: &str) {
    let path = root.join(resource);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "data/korean_datasets.json",
        r#"{"last_updated": "2024-01-15T03:12:45", "datasets": [
            {"id": "b/second", "likes": 3, "tasks": ["translation"]},
            {"id": "a/first", "author": "a", "likes": 10, "description": "Korean QA"}
        ]}"#,
    );
    write(
        temp.path(),
        "data/changelog.json",
        r#"{"previous_date": "20240108", "current_date": "20240115",
            "previous_count": 1, "current_count": 2,
            "summary": {"new_count": 1, "removed_count": 0, "updated_count": 0, "unchanged_count": 1},
            "changes": {"new_datasets": [{"id": "a/first"}], "removed_datasets": [], "updated_datasets": []}}"#,
    );
    temp
}

#[test]
fn test_catalog_loads_without_statistics() {
    let temp = site();
    let source = FsSource::new(temp.path());

    let state = PageState::<CatalogPage>::open(&source);
    let page = state.ready().expect("catalog should load");

    assert!(page.statistics().is_none());
    assert_eq!(page.options().authors, vec!["a"]);
    assert_eq!(page.options().tasks, vec!["translation"]);
    assert_eq!(page.view().match_count, 2);
}

#[test]
fn test_changelog_net_change_is_derived() {
    let temp = site();
    let source = FsSource::new(temp.path());

    let state = PageState::<ChangelogPage>::open(&source);
    let page = state.ready().unwrap();
    assert_eq!(page.changelog().summary.net_change(), 1);
}

#[test]
fn test_missing_documents_fail_their_page_only() {
    let temp = site();
    let source = SiteLocation::parse(temp.path().to_str().unwrap()).open().unwrap();

    let trends = PageState::<TrendsPage>::open(source.as_ref());
    assert!(matches!(trends.error(), Some(LoadError::Unavailable { .. })));

    let stats = PageState::<StatisticsPage>::open(source.as_ref());
    assert!(stats.error().is_some());

    let catalog = PageState::<CatalogPage>::open(source.as_ref());
    assert!(catalog.ready().is_some());
}

#[test]
fn test_malformed_catalog_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "data/korean_datasets.json", "[1, 2");

    let state = PageState::<CatalogPage>::open(&FsSource::new(temp.path()));
    assert!(matches!(state.error(), Some(LoadError::Malformed { .. })));
}
