use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::source::SnapshotSource;

pub const RESOURCE_CATALOG: &str = "data/korean_datasets.json";
pub const RESOURCE_STATISTICS: &str = "data/statistics.json";
pub const RESOURCE_CHANGELOG: &str = "data/changelog.json";
pub const RESOURCE_TRENDS: &str = "data/trends.json";

/// Fetch and parse one snapshot document. Single attempt, no retries.
pub fn load<T: DeserializeOwned>(
    source: &dyn SnapshotSource,
    resource: &str,
) -> Result<T, LoadError> {
    debug!(resource, site = %source.describe(), "loading snapshot");

    let result = source.fetch(resource).and_then(|bytes| {
        serde_json::from_slice(&bytes).map_err(|err| LoadError::Malformed {
            resource: resource.to_string(),
            source: err,
        })
    });

    if let Err(err) = &result {
        warn!(resource, site = %source.describe(), error = %err, "snapshot load failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use kodata_types::TrendsDocument;
    use std::collections::HashMap;

    struct MemorySource(HashMap<&'static str, &'static str>);

    impl SnapshotSource for MemorySource {
        fn fetch(&self, resource: &str) -> Result<Vec<u8>, LoadError> {
            self.0
                .get(resource)
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| LoadError::Status {
                    resource: resource.to_string(),
                    status: 404,
                })
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_load_parses_document() {
        let source = MemorySource(HashMap::from([(
            RESOURCE_TRENDS,
            r#"{"trends": {"dates": ["20240101"], "total_datasets": [1], "total_downloads": [2],
                "total_likes": [3], "multilingual_count": [0], "growth_rate": 0, "total_weeks": 1}}"#,
        )]));

        let doc: TrendsDocument = load(&source, RESOURCE_TRENDS).unwrap();
        assert_eq!(doc.trends.total_weeks, 1);
    }

    #[test]
    fn test_load_malformed_json() {
        let source = MemorySource(HashMap::from([(RESOURCE_TRENDS, "{ not json")]));

        let err = load::<TrendsDocument>(&source, RESOURCE_TRENDS).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_load_passes_fetch_errors_through() {
        let source = MemorySource(HashMap::new());

        let err = load::<TrendsDocument>(&source, RESOURCE_CHANGELOG).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }
}
