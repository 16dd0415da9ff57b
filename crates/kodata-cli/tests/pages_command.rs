use assert_cmd::cargo::cargo_bin_cmd;
use kodata_testing::{TestWorld, assertions, fixtures};
use predicates::prelude::*;

#[test]
fn test_changelog_badges_and_net_change() {
    let world = TestWorld::with_sample_site();
    let json = world
        .run(&["--format", "json", "changelog"])
        .unwrap()
        .json()
        .unwrap();
    let content = &json["content"];

    assert_eq!(content["previous_date"], "2024-01-08");
    assert_eq!(content["current_date"], "2024-01-15");
    assert_eq!(content["summary"]["net_change"], 0);

    let updated = &content["updated_datasets"][0];
    assert_eq!(updated["badges"].as_array().unwrap().len(), 1);
    assert_eq!(updated["badges"][0]["tone"], "negative");
    assert_eq!(updated["badges"][0]["label"], "Likes: -5 (25 → 20)");

    let new = &content["new_datasets"][0];
    assert_eq!(new["badges"][0]["label"], "1,200 downloads");
    assert_eq!(new["badges"].as_array().unwrap().len(), 1);

    let removed = &content["removed_datasets"][0];
    assert_eq!(removed["badges"][1]["label"], "Had 2 likes");
}

#[test]
fn test_trends_charts() {
    let world = TestWorld::with_sample_site();
    let json = world
        .run(&["--format", "json", "trends"])
        .unwrap()
        .json()
        .unwrap();
    let content = &json["content"];

    assert_eq!(content["summary"]["growth_label"], "+12.5%");
    assert_eq!(content["summary"]["date_range"], "2024-01-01 ~ 2024-01-15");

    let charts = content["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 4);
    assert_eq!(charts[0]["kind"], "line");
    assert_eq!(charts[3]["kind"], "bar");
    assert_eq!(charts[3]["data"], serde_json::json!([25.0, 12.5, 8.3]));
}

#[test]
fn test_missing_trends_is_isolated() {
    let world = TestWorld::new()
        .with_document(fixtures::CATALOG, &fixtures::sample_catalog())
        .with_document(fixtures::CHANGELOG, &fixtures::sample_changelog());

    let trends = world
        .run(&["--format", "json", "trends"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_fallback(&trends, "trends").unwrap();
    assert_eq!(
        trends["content"]["message"],
        "Trend data not yet available. Data will be collected starting next week."
    );

    assert!(world.run(&["changelog"]).unwrap().success());
    let catalog = world
        .run(&["--format", "json", "catalog"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(catalog["badge"]["level"], "success");
    assert!(catalog["content"].get("statistics").is_none());
}

#[test]
fn test_trends_with_wrong_series_length_shows_fallback() {
    let mut trends = fixtures::sample_trends();
    trends["trends"]["total_likes"] = serde_json::json!([1, 2]);
    let world = TestWorld::new().with_document(fixtures::TRENDS, &trends);

    let result = world.run(&["trends"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Trend data not yet available."));
}

#[test]
fn test_stats_fallback() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd).arg("stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Statistics not yet available."));
}

#[test]
fn test_korean_locale() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("kodata");
    world
        .configure_command(&mut cmd)
        .args(["--locale", "ko", "changelog"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("변경 이력이 아직 없습니다."));
}

#[test]
fn test_locale_from_config_file() {
    let world = TestWorld::new().with_config("locale = \"ko\"\n");

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd).arg("trends");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("트렌드 데이터가 아직 없습니다."));
}

#[test]
fn test_invalid_config_is_an_error() {
    let world = TestWorld::with_sample_site().with_config("locale = [");

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd).arg("catalog");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_browse_requires_a_terminal() {
    let world = TestWorld::with_sample_site();

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd).arg("browse");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("kodata");
    world.configure_command(&mut cmd);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kodata catalog"));
}
