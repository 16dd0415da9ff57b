use kodata_types::{Trend, TrendsDocument};

use super::Page;
use crate::error::LoadError;
use crate::loader::{RESOURCE_TRENDS, load};
use crate::source::SnapshotSource;

/// Trend history. Only constructed from a record whose series are aligned.
#[derive(Debug, Clone)]
pub struct TrendsPage {
    document: TrendsDocument,
}

impl TrendsPage {
    pub fn new(document: TrendsDocument) -> Result<Self, LoadError> {
        document
            .trends
            .validate()
            .map_err(|err| LoadError::Invalid {
                resource: RESOURCE_TRENDS.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self { document })
    }

    pub fn trend(&self) -> &Trend {
        &self.document.trends
    }

    pub fn generated_at(&self) -> Option<&str> {
        self.document.generated_at.as_deref()
    }
}

impl Page for TrendsPage {
    const NAME: &'static str = "trends";

    fn load(source: &dyn SnapshotSource) -> Result<Self, LoadError> {
        load(source, RESOURCE_TRENDS).and_then(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misaligned_trend_is_invalid() {
        let document = TrendsDocument {
            generated_at: None,
            trends: Trend {
                dates: vec!["20240101".to_string(), "20240108".to_string()],
                total_datasets: vec![1, 2],
                total_downloads: vec![1, 2],
                total_likes: vec![1, 2],
                multilingual_count: vec![1],
                ..Default::default()
            },
        };

        let err = TrendsPage::new(document).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
        assert_eq!(err.resource(), RESOURCE_TRENDS);
    }
}
