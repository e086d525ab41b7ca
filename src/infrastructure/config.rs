//! Configuration loading and validation

use crate::domain::journal;
use crate::error::{DaybookError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "DAYBOOK_CONFIG";

/// Resolve the config file location: `$DAYBOOK_CONFIG` if set, otherwise
/// `<OS config dir>/daybook/config.toml`.
pub fn config_file_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daybook")
            .join("config.toml"),
    }
}

/// Default location for scratch copies: `<OS local data dir>/daybook`.
pub fn default_scratch_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("daybook")
}

/// Detect default editor from environment or system
pub fn detect_default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// On-disk form of the configuration. Every core field is optional so
/// that validation can report all missing keys at once.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    journal_directory: Option<String>,
    preferred_editor: Option<String>,
    date_format: Option<String>,
    file_extension: Option<String>,
    scratch_directory: Option<String>,
    #[serde(default)]
    hooks: HookSettings,
    #[serde(default)]
    plugins: toml::Table,
}

/// Hook names per lifecycle stage, in invocation order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookSettings {
    #[serde(default)]
    pub created: Vec<String>,
    #[serde(default)]
    pub opened: Vec<String>,
    #[serde(default)]
    pub saved: Vec<String>,
    #[serde(default)]
    pub closed: Vec<String>,
}

/// Validated application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub journal_directory: PathBuf,
    pub preferred_editor: String,
    pub date_format: String,
    pub file_extension: String,
    pub scratch_directory: PathBuf,
    pub hooks: HookSettings,
    pub plugins: toml::Table,
    /// Where the configuration was read from; named in error messages
    pub source_path: PathBuf,
}

impl Settings {
    /// Load and validate settings from the resolved config location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&config_file_path())
    }

    /// Load and validate settings from a specific config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::ConfigNotFound(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        let raw: RawSettings = toml::from_str(&contents)?;
        raw.validate(path)
    }

    /// The configuration sub-table for a plugin, if one is present
    pub fn plugin_config(&self, name: &str) -> Option<&toml::Table> {
        self.plugins.get(name).and_then(|value| value.as_table())
    }
}

impl RawSettings {
    /// Promote raw settings to validated `Settings`, collecting every
    /// missing required key into a single error.
    fn validate(self, source: &Path) -> Result<Settings> {
        let mut missing = Vec::new();

        let journal_directory = require(self.journal_directory, "journal_directory", &mut missing);
        let preferred_editor = require(self.preferred_editor, "preferred_editor", &mut missing);
        let date_format = require(self.date_format, "date_format", &mut missing);
        let file_extension = require(self.file_extension, "file_extension", &mut missing);

        if !missing.is_empty() {
            return Err(DaybookError::MissingConfigKeys {
                missing,
                path: source.to_path_buf(),
            });
        }

        if preferred_editor.trim().is_empty() {
            return Err(DaybookError::InvalidConfigValue {
                key: "preferred_editor".to_string(),
                reason: "editor command is empty".to_string(),
            });
        }

        let file_extension = file_extension.trim_start_matches('.').to_string();
        if file_extension.is_empty() {
            return Err(DaybookError::InvalidConfigValue {
                key: "file_extension".to_string(),
                reason: "extension is empty".to_string(),
            });
        }

        // Probe the strftime pattern once so a bad pattern surfaces here
        // instead of at filename generation time.
        journal::filename_for_date(NaiveDate::default(), &date_format, &file_extension)?;

        let journal_directory = expand_path("journal_directory", &journal_directory)?;
        let scratch_directory = match self.scratch_directory {
            Some(dir) => expand_path("scratch_directory", &dir)?,
            None => default_scratch_dir(),
        };

        Ok(Settings {
            journal_directory,
            preferred_editor,
            date_format,
            file_extension,
            scratch_directory,
            hooks: self.hooks,
            plugins: self.plugins,
            source_path: source.to_path_buf(),
        })
    }
}

/// Record the key as missing when absent; the placeholder never escapes
/// because validation errors out before using it.
fn require(field: Option<String>, key: &str, missing: &mut Vec<String>) -> String {
    match field {
        Some(value) => value,
        None => {
            missing.push(key.to_string());
            String::new()
        }
    }
}

/// Expand `~` and environment variables in a configured path
fn expand_path(key: &str, value: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(value).map_err(|e| DaybookError::InvalidConfigValue {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}
