//! Journal file naming

use crate::error::{DaybookError, Result};
use chrono::NaiveDate;
use std::fmt::Write;

/// Generate the journal filename for a date: `<formatted date>.<extension>`.
///
/// Fails if the configured strftime pattern is not understood by chrono;
/// a bad pattern is a configuration mistake, not a crash.
pub fn filename_for_date(date: NaiveDate, date_format: &str, extension: &str) -> Result<String> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(date_format)).map_err(|_| {
        DaybookError::InvalidConfigValue {
            key: "date_format".to_string(),
            reason: format!("'{}' is not a valid strftime pattern", date_format),
        }
    })?;

    Ok(format!("{}.{}", formatted, extension))
}

/// Parse a filename back to the date it represents.
/// Returns None if the filename doesn't match the pattern and extension.
pub fn date_from_filename(
    filename: &str,
    date_format: &str,
    extension: &str,
) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(extension)?.strip_suffix('.')?;
    NaiveDate::parse_from_str(stem, date_format).ok()
}
