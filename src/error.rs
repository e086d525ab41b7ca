//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the daybook application
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Configuration at {} is missing required keys: {}", .path.display(), .missing.join(", "))]
    MissingConfigKeys { missing: Vec<String>, path: PathBuf },

    #[error("No configuration file found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Configuration already exists at {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidConfigValue { key: String, reason: String },

    #[error("Unknown config key: '{0}'")]
    UnknownConfigKey(String),

    #[error("Couldn't find plugin '{}' named in configuration at {}", .name, .path.display())]
    PluginNotFound { name: String, path: PathBuf },

    #[error("Journal already open: scratch copy exists at {}", .0.display())]
    DuplicateSession(PathBuf),

    #[error("Couldn't parse date phrase: '{0}'")]
    UnparsedPhrase(String),

    #[error("Journal directory does not exist: {}", .0.display())]
    JournalDirMissing(PathBuf),

    #[error("Editor command not found: '{0}'")]
    EditorNotFound(String),

    #[error("Permission denied launching editor: '{0}'")]
    EditorPermission(String),

    #[error("Failed to launch editor '{command}': {source}")]
    EditorLaunch {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        // Every failure is fatal in a single-shot CLI; they all map to 1.
        1
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::MissingConfigKeys { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Add the missing keys to {}\n\
                    • Run 'daybook init --force' to write a fresh starter config\n\
                    • Required keys: journal_directory, preferred_editor, date_format, file_extension",
                    self, path.display()
                )
            }
            DaybookError::ConfigNotFound(path) => {
                format!(
                    "No configuration file found at {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' to create a starter config\n\
                    • Set DAYBOOK_CONFIG to point at an existing config file",
                    path.display()
                )
            }
            DaybookError::ConfigExists(path) => {
                format!(
                    "Configuration already exists at {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init --force' to overwrite it\n\
                    • Run 'daybook config --list' to inspect it",
                    path.display()
                )
            }
            DaybookError::UnknownConfigKey(key) => {
                format!(
                    "Unknown config key: '{}'\n\n\
                    Valid keys: journal_directory, preferred_editor, date_format, \
                    file_extension, scratch_directory",
                    key
                )
            }
            DaybookError::PluginNotFound { name, path } => {
                format!(
                    "Couldn't find plugin '{}' named in configuration at {}\n\n\
                    Suggestions:\n\
                    • Check the [hooks] section for typos\n\
                    • Run 'daybook config --list' to inspect your configuration\n\
                    • Built-in plugins: date-header, timestamp",
                    name,
                    path.display()
                )
            }
            DaybookError::DuplicateSession(path) => {
                format!(
                    "Journal already open: scratch copy exists at {}\n\n\
                    Suggestions:\n\
                    • Close the other editor session first\n\
                    • If no other session is running, delete the stale scratch file",
                    path.display()
                )
            }
            DaybookError::UnparsedPhrase(phrase) => {
                format!(
                    "Couldn't parse date phrase: '{}'\n\n\
                    Valid phrases:\n\
                    • today, yesterday, tomorrow\n\
                    • <n> days/weeks/months/years ago (e.g., 'two days ago', '3 weeks ago')\n\
                    • <n> days/weeks/months/years from now\n\
                    • last monday, this friday, next wednesday, etc.\n\n\
                    Examples:\n\
                    daybook yesterday\n\
                    daybook four days ago\n\
                    daybook next wednesday",
                    phrase
                )
            }
            DaybookError::JournalDirMissing(path) => {
                format!(
                    "Journal directory does not exist: {}\n\n\
                    Suggestions:\n\
                    • Create the directory: mkdir -p {}\n\
                    • Or point journal_directory in your config at an existing directory",
                    path.display(),
                    path.display()
                )
            }
            DaybookError::EditorNotFound(command) => {
                format!(
                    "Editor command not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Configure a different editor: daybook config preferred_editor nano",
                    command
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
