//! Built-in journal hooks

use crate::error::{DaybookError, Result};
use crate::infrastructure::hooks::JournalHook;
use chrono::Local;
use std::fmt::Write;

const DEFAULT_HEADER_FORMAT: &str = "%Y-%m-%d";

/// Prepends a `# <date>` heading when the content has none.
///
/// Intended for the created stage. The heading date format can be
/// overridden with a `format` key in the plugin's configuration table.
pub struct DateHeader;

impl JournalHook for DateHeader {
    fn name(&self) -> &str {
        "date-header"
    }

    fn apply(
        &self,
        lines: &[String],
        config: Option<&toml::Table>,
    ) -> Result<Option<Vec<String>>> {
        if lines.first().map_or(false, |line| line.starts_with("# ")) {
            return Ok(None);
        }

        let format = config
            .and_then(|table| table.get("format"))
            .and_then(|value| value.as_str())
            .unwrap_or(DEFAULT_HEADER_FORMAT);

        let mut updated = vec![format!("# {}", format_now(format)?), String::new()];
        updated.extend(lines.iter().cloned());
        Ok(Some(updated))
    }
}

/// Appends a blank line and a `## HH:MM` timestamp for the current
/// local time. Intended for the opened stage.
pub struct Timestamp;

impl JournalHook for Timestamp {
    fn name(&self) -> &str {
        "timestamp"
    }

    fn apply(
        &self,
        lines: &[String],
        _config: Option<&toml::Table>,
    ) -> Result<Option<Vec<String>>> {
        let mut updated = lines.to_vec();
        updated.push(String::new());
        updated.push(format!("## {}", Local::now().format("%H:%M")));
        Ok(Some(updated))
    }
}

/// Format the current local time with a user-supplied pattern. chrono
/// surfaces a bad pattern as a formatter error, which `format!` would
/// turn into a panic; capturing through `write!` keeps it an `Err`.
fn format_now(pattern: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", Local::now().format(pattern)).map_err(|_| {
        DaybookError::InvalidConfigValue {
            key: "plugins.date-header.format".to_string(),
            reason: format!("'{}' is not a valid strftime pattern", pattern),
        }
    })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_date_header_prepends_heading_to_empty_content() {
        let updated = DateHeader.apply(&[], None).unwrap().unwrap();

        assert_eq!(updated.len(), 2);
        assert!(updated[0].starts_with("# "));
        assert_eq!(updated[1], "");

        // Default format is an ISO date
        let date_part = &updated[0][2..];
        assert_eq!(date_part.len(), 10);
        assert!(date_part.chars().all(|c| c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_date_header_keeps_existing_heading() {
        let content = lines(&["# Already here", "", "body"]);
        assert!(DateHeader.apply(&content, None).unwrap().is_none());
    }

    #[test]
    fn test_date_header_prepends_before_plain_content() {
        let content = lines(&["just some text"]);
        let updated = DateHeader.apply(&content, None).unwrap().unwrap();

        assert_eq!(updated.len(), 3);
        assert!(updated[0].starts_with("# "));
        assert_eq!(updated[1], "");
        assert_eq!(updated[2], "just some text");
    }

    #[test]
    fn test_date_header_honors_format_key() {
        let mut table = toml::Table::new();
        table.insert("format".to_string(), toml::Value::String("%Y".to_string()));

        let updated = DateHeader.apply(&[], Some(&table)).unwrap().unwrap();
        let year_part = &updated[0][2..];
        assert_eq!(year_part.len(), 4);
        assert!(year_part.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_date_header_rejects_bad_format_pattern() {
        let mut table = toml::Table::new();
        table.insert("format".to_string(), toml::Value::String("%Q".to_string()));

        let err = DateHeader.apply(&[], Some(&table)).unwrap_err();
        assert!(matches!(err, DaybookError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_timestamp_appends_heading() {
        let content = lines(&["# Title", "", "body"]);
        let updated = Timestamp.apply(&content, None).unwrap().unwrap();

        assert_eq!(updated.len(), 5);
        assert_eq!(&updated[..3], &content[..]);
        assert_eq!(updated[3], "");

        let stamp = &updated[4];
        assert!(stamp.starts_with("## "));
        let clock = &stamp[3..];
        assert_eq!(clock.len(), 5);
        assert_eq!(clock.as_bytes()[2], b':');
    }

    #[test]
    fn test_timestamp_on_empty_content() {
        let updated = Timestamp.apply(&[], None).unwrap().unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0], "");
        assert!(updated[1].starts_with("## "));
    }
}
