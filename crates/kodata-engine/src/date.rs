use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected an 8-digit YYYYMMDD date, got '{0}'")]
    NotYyyymmdd(String),
}

/// `YYYYMMDD` → `YYYY-MM-DD` by positional slicing.
///
/// Anything that is not exactly eight ASCII digits is rejected instead of being
/// sliced into a plausible-looking but wrong date.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NotYyyymmdd(raw.to_string()));
    }

    Ok(format!("{}-{}-{}", &raw[0..4], &raw[4..6], &raw[6..8]))
}
