//! Assertions over `--format json` output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Ids of the cards on the rendered catalog page, in display order
pub fn card_ids(json: &Value) -> Result<Vec<String>> {
    let cards = json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")?;

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Card {} missing id", i))
        })
        .collect()
}

pub fn assert_card_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = card_ids(json)?;
    if ids != expected {
        bail!("Expected cards {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn assert_pagination(json: &Value, page: u64, total_pages: u64) -> Result<()> {
    let pagination = &json["content"]["pagination"];
    let actual = (
        pagination["page"].as_u64().context("Missing pagination.page")?,
        pagination["total_pages"]
            .as_u64()
            .context("Missing pagination.total_pages")?,
    );

    if actual != (page, total_pages) {
        bail!(
            "Expected page {} / {}, got {} / {}",
            page,
            total_pages,
            actual.0,
            actual.1
        );
    }
    Ok(())
}

/// The badge carries the page fallback and the content is only the notice
pub fn assert_fallback(json: &Value, page: &str) -> Result<()> {
    if json["badge"]["level"] != "error" {
        bail!("Expected an error badge, got {}", json["badge"]);
    }
    if json["content"]["page"] != page {
        bail!("Expected fallback for {}, got {}", page, json["content"]["page"]);
    }
    Ok(())
}
