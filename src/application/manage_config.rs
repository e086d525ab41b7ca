//! Config management use case

use crate::error::{DaybookError, Result};
use std::fs;
use std::path::PathBuf;

/// Keys the `config` command will read or write
const CONFIG_KEYS: [&str; 5] = [
    "journal_directory",
    "preferred_editor",
    "date_format",
    "file_extension",
    "scratch_directory",
];

/// Service for reading and writing single configuration values.
///
/// Operates on the TOML document directly, so get and set keep working
/// while the file is incomplete or mid-setup.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a config service over the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        let table = self.load_document()?;

        match table.get(key) {
            Some(toml::Value::String(value)) => Ok(value.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(DaybookError::MissingConfigKeys {
                missing: vec![key.to_string()],
                path: self.path.clone(),
            }),
        }
    }

    /// Set a config value, rewriting the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut table = self.load_document()?;

        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        fs::write(&self.path, toml::to_string_pretty(&table)?)?;
        Ok(())
    }

    /// Render the whole configuration document for display
    pub fn list(&self) -> Result<String> {
        let table = self.load_document()?;
        Ok(toml::to_string_pretty(&table)?)
    }

    fn load_document(&self) -> Result<toml::Table> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::ConfigNotFound(self.path.clone())
            } else {
                DaybookError::Io(e)
            }
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if CONFIG_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(DaybookError::UnknownConfigKey(key.to_string()))
    }
}
