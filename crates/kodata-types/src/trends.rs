use serde::{Deserialize, Serialize};

use crate::catalog::{Statistics, null_as_default};
use crate::error::{Error, Result};

/// `data/trends.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsDocument {
    #[serde(default)]
    pub generated_at: Option<String>,

    pub trends: Trend,
}

/// Weekly samples stored as parallel sequences; index `i` is one sample across all of them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// `YYYYMMDD` per sample
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_datasets: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_downloads: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_likes: Vec<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub multilingual_count: Vec<u64>,

    /// Signed percentage between first and last sample
    #[serde(default, deserialize_with = "null_as_default")]
    pub growth_rate: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_weeks: u64,

    #[serde(default)]
    pub first_date: Option<String>,

    #[serde(default)]
    pub last_date: Option<String>,

    #[serde(default)]
    pub latest_stats: Option<Statistics>,
}

impl Trend {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Check that every series has exactly one value per date
    pub fn validate(&self) -> Result<()> {
        let expected = self.dates.len();
        let series: [(&'static str, usize); 4] = [
            ("total_datasets", self.total_datasets.len()),
            ("total_downloads", self.total_downloads.len()),
            ("total_likes", self.total_likes.len()),
            ("multilingual_count", self.multilingual_count.len()),
        ];

        for (name, actual) in series {
            if actual != expected {
                return Err(Error::SeriesLength {
                    series: name,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}
