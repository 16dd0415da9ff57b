use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use kodata_types::Dataset;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most liked first
    Likes,
    /// Most downloaded first
    Downloads,
    /// Most recently modified first, undated last
    Recent,
    /// Ascending by id
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Likes,
        SortKey::Downloads,
        SortKey::Recent,
        SortKey::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Likes => "likes",
            SortKey::Downloads => "downloads",
            SortKey::Recent => "recent",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key '{}'", s))
    }
}

/// Ordering of two datasets under `key`
pub fn compare(a: &Dataset, b: &Dataset, key: SortKey) -> Ordering {
    match key {
        SortKey::Likes => b.likes.cmp(&a.likes),
        SortKey::Downloads => b.downloads.cmp(&a.downloads),
        SortKey::Recent => modified_at(b).cmp(&modified_at(a)),
        SortKey::Name => compare_names(&a.id, &b.id),
    }
}

/// Stable sort. `None` keeps the input order.
pub fn sort_by<T: Borrow<Dataset>>(mut items: Vec<T>, key: Option<SortKey>) -> Vec<T> {
    if let Some(key) = key {
        items.sort_by(|a, b| compare(a.borrow(), b.borrow(), key));
    }
    items
}

// Case-folded, then ordinal on ties
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn modified_at(dataset: &Dataset) -> DateTime<Utc> {
    dataset
        .last_modified
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Parse the timestamp shapes the collector emits.
///
/// Accepts RFC 3339, Python's `str(datetime)` (`2023-11-20 08:30:00+00:00`),
/// naive ISO timestamps (taken as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liked(id: &str, likes: u64) -> Dataset {
        let mut ds = Dataset::new(id);
        ds.likes = likes;
        ds
    }

    fn modified(id: &str, ts: Option<&str>) -> Dataset {
        let mut ds = Dataset::new(id);
        ds.last_modified = ts.map(String::from);
        ds
    }

    fn ids<T: Borrow<Dataset>>(items: &[T]) -> Vec<&str> {
        items.iter().map(|d| d.borrow().id.as_str()).collect()
    }

    #[test]
    fn test_likes_descending_with_stable_ties() {
        let data = vec![liked("A", 5), liked("B", 20), liked("C", 20)];
        let sorted = sort_by(data, Some(SortKey::Likes));
        assert_eq!(ids(&sorted), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_likes_sequence_is_non_increasing() {
        let data: Vec<Dataset> = [3, 0, 9, 9, 1, 0, 42]
            .iter()
            .enumerate()
            .map(|(i, l)| liked(&format!("d{}", i), *l))
            .collect();
        let sorted = sort_by(data.iter().collect::<Vec<_>>(), Some(SortKey::Likes));

        assert!(sorted.windows(2).all(|w| w[0].likes >= w[1].likes));
        // zero-like records keep input order
        let zeros: Vec<&str> = sorted.iter().filter(|d| d.likes == 0).map(|d| d.id.as_str()).collect();
        assert_eq!(zeros, vec!["d1", "d5"]);
    }

    #[test]
    fn test_downloads_descending() {
        let mut a = Dataset::new("a");
        a.downloads = 10;
        let mut b = Dataset::new("b");
        b.downloads = 1_000;
        let sorted = sort_by(vec![a, b], Some(SortKey::Downloads));
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_recent_puts_undated_last() {
        let data = vec![
            modified("old", Some("2022-03-01 00:00:00+00:00")),
            modified("none", None),
            modified("new", Some("2024-01-10T12:00:00Z")),
            modified("garbage", Some("not a date")),
        ];
        let sorted = sort_by(data, Some(SortKey::Recent));
        assert_eq!(ids(&sorted), vec!["new", "old", "none", "garbage"]);
    }

    #[test]
    fn test_name_ascending_case_folded() {
        let data = vec![
            Dataset::new("beta/set"),
            Dataset::new("Alpha/set"),
            Dataset::new("alpha/other"),
        ];
        let sorted = sort_by(data, Some(SortKey::Name));
        assert_eq!(ids(&sorted), vec!["alpha/other", "Alpha/set", "beta/set"]);
    }

    #[test]
    fn test_no_key_preserves_order() {
        let data = vec![liked("x", 1), liked("y", 100)];
        let sorted = sort_by(data, None);
        assert_eq!(ids(&sorted), vec!["x", "y"]);
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        assert!(parse_timestamp("2023-11-20 08:30:00+00:00").is_some());
        assert!(parse_timestamp("2023-11-20 08:30:00.123456+09:00").is_some());
        assert!(parse_timestamp("2024-01-15T03:12:45.123456").is_some());
        assert!(parse_timestamp("2024-01-15").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("recent".parse::<SortKey>(), Ok(SortKey::Recent));
        assert!("popular".parse::<SortKey>().is_err());
    }
}
