use assert_cmd::cargo::cargo_bin_cmd;
use kodata_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

fn catalog_json(world: &TestWorld, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["--format", "json", "catalog"];
    args.extend_from_slice(extra);

    let result = world.run(&args).expect("Failed to run catalog");
    assert!(result.success(), "catalog failed: {}", result.stderr());
    result.json().expect("catalog output should be JSON")
}

#[test]
fn test_first_page_keeps_collection_order() {
    let world = TestWorld::with_sample_site();
    let json = catalog_json(&world, &[]);

    assertions::assert_card_ids(&json, &["alpha/korean-news", "beta/qa-pairs", "gamma/chat"])
        .unwrap();
    assertions::assert_pagination(&json, 1, 1).unwrap();
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["statistics"]["total_downloads"], 1225);
}

#[test]
fn test_sort_by_downloads() {
    let world = TestWorld::with_sample_site();
    let json = catalog_json(&world, &["--sort", "downloads"]);

    assertions::assert_card_ids(&json, &["gamma/chat", "beta/qa-pairs", "alpha/korean-news"])
        .unwrap();
    assert_eq!(json["content"]["query"]["sort"], "downloads");
}

#[test]
fn test_sort_ties_keep_collection_order() {
    let world = TestWorld::with_sample_site();
    let json = catalog_json(&world, &["--sort", "likes"]);

    assertions::assert_card_ids(&json, &["alpha/korean-news", "beta/qa-pairs", "gamma/chat"])
        .unwrap();
}

#[test]
fn test_search_is_case_insensitive_over_id_and_description() {
    let world = TestWorld::with_sample_site();

    let by_description = catalog_json(&world, &["--search", "NEWS"]);
    assertions::assert_card_ids(&by_description, &["alpha/korean-news"]).unwrap();

    let by_id = catalog_json(&world, &["--search", "qa-"]);
    assertions::assert_card_ids(&by_id, &["beta/qa-pairs"]).unwrap();
}

#[test]
fn test_author_and_task_filters_combine() {
    let world = TestWorld::with_sample_site();

    let json = catalog_json(&world, &["--author", "beta", "--task", "text-generation"]);
    assertions::assert_card_ids(&json, &["beta/qa-pairs"]).unwrap();

    let json = catalog_json(&world, &["--author", "alpha", "--task", "text-generation"]);
    assertions::assert_card_ids(&json, &[]).unwrap();
    assert_eq!(json["badge"]["level"], "info");
    assert_eq!(json["suggestions"][0]["command"], "kodata catalog");
}

#[test]
fn test_placeholders_for_missing_fields() {
    let world = TestWorld::with_sample_site();
    let json = catalog_json(&world, &["--search", "chat"]);
    let card = &json["content"]["cards"][0];

    assert_eq!(card["author"], "Unknown");
    assert_eq!(card["body"], "No description available.");
    assert_eq!(card["has_description"], false);
    assert_eq!(card["url"], "https://huggingface.co/datasets/gamma/chat");
}

#[test]
fn test_pages_of_twelve() {
    let world = TestWorld::new().with_document(fixtures::CATALOG, &fixtures::catalog_of(25));

    let first = catalog_json(&world, &[]);
    assert_eq!(assertions::card_ids(&first).unwrap().len(), 12);
    assertions::assert_pagination(&first, 1, 3).unwrap();
    assert_eq!(first["content"]["pagination"]["prev_disabled"], true);

    let last = catalog_json(&world, &["--page", "3"]);
    assertions::assert_card_ids(&last, &["org/dataset-24"]).unwrap();
    assert_eq!(last["content"]["pagination"]["next_disabled"], true);

    let past_end = catalog_json(&world, &["--page", "4"]);
    assertions::assert_card_ids(&past_end, &[]).unwrap();
    assert_eq!(past_end["content"]["match_count"], 25);
    assert_eq!(past_end["badge"]["level"], "warning");
}

#[test]
fn test_missing_catalog_shows_fallback_and_exits_zero() {
    let world = TestWorld::new();

    let json = world
        .run(&["--format", "json", "catalog"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_fallback(&json, "catalog").unwrap();

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd).arg("catalog");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Error loading datasets."))
        .stdout(predicate::str::contains("Last updated").not());
}

#[test]
fn test_malformed_catalog_shows_fallback() {
    let world = TestWorld::new().with_raw_document(fixtures::CATALOG, "{\"datasets\": [");

    let result = world.run(&["catalog"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Error loading datasets."));
}

#[test]
fn test_minimal_view_prints_ids_only() {
    let world = TestWorld::with_sample_site();

    let mut cmd = cargo_bin_cmd!("kodata");
    world
        .configure_command(&mut cmd)
        .args(["--view", "minimal", "catalog", "--sort", "downloads"]);
    cmd.assert()
        .success()
        .stdout("gamma/chat\nbeta/qa-pairs\nalpha/korean-news\n");
}

#[test]
fn test_export_writes_every_match() {
    let world = TestWorld::new().with_document(fixtures::CATALOG, &fixtures::catalog_of(25));
    let path = world.temp_dir().join("export.csv");

    let result = world
        .run(&["--format", "json", "catalog", "--export", path.to_str().unwrap()])
        .unwrap();
    assert!(result.success(), "export failed: {}", result.stderr());
    assert_eq!(result.json().unwrap()["content"]["rows"], 25);

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "id,author,downloads,likes,languages,tasks,last_modified,url");
    assert!(lines[1].starts_with("org/dataset-00,org,250,1,ko,text-classification,"));
}

#[test]
fn test_filters_lists_sorted_options() {
    let world = TestWorld::with_sample_site();
    let json = world
        .run(&["--format", "json", "filters"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["authors"], serde_json::json!(["alpha", "beta"]));
    assert_eq!(
        json["content"]["tasks"],
        serde_json::json!(["question-answering", "summarization", "text-generation"])
    );
}
