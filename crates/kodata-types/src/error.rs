use thiserror::Error;

/// Result type for kodata-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shape violations detected after a snapshot deserialized successfully
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A parallel trend sequence does not line up with `dates`
    #[error("trend series '{series}' has {actual} samples, expected {expected}")]
    SeriesLength {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}
