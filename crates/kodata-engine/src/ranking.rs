use std::collections::BTreeMap;

/// Entries by descending count, ties by name
pub fn rank_counts(counts: &BTreeMap<String, u64>) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_counts() {
        let counts = BTreeMap::from([
            ("b".to_string(), 3),
            ("a".to_string(), 3),
            ("c".to_string(), 10),
        ]);
        assert_eq!(rank_counts(&counts), vec![("c", 10), ("a", 3), ("b", 3)]);
    }
}
