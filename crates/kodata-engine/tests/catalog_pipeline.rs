use kodata_engine::*;
use kodata_types::Dataset;

fn dataset(id: &str, likes: u64, description: Option<&str>) -> Dataset {
    let mut ds = Dataset::new(id);
    ds.likes = likes;
    ds.description = description.map(String::from);
    ds
}

#[test]
fn test_filter_sort_paginate_pipeline() {
    let collection: Vec<Dataset> = (0..30)
        .map(|i| dataset(&format!("org/ko-{:02}", i), (i * 7 % 11) as u64, Some("Korean text")))
        .chain([dataset("org/other", 100, None)])
        .collect();

    let filtered = apply_filters(&collection, &FilterCriteria::new().with_search("korean"));
    assert_eq!(filtered.len(), 30);

    let sorted = sort_by(filtered, Some(SortKey::Likes));
    assert!(sorted.windows(2).all(|w| w[0].likes >= w[1].likes));

    let page = paginate(&sorted, 3, PAGE_SIZE);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 6);
}

#[test]
fn test_scenario_likes_ties_keep_input_order() {
    let collection = vec![dataset("A", 5, None), dataset("B", 20, None), dataset("C", 20, None)];
    let ids: Vec<String> = sort_by(collection, Some(SortKey::Likes))
        .into_iter()
        .map(|d| d.id)
        .collect();

    assert_eq!(ids, vec!["B", "C", "A"]);
}
