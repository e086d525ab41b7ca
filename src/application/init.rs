//! Initialize configuration use case

use crate::error::{DaybookError, Result};
use crate::infrastructure::config;
use std::fs;
use std::path::Path;

/// Write a commented starter configuration to `path`.
///
/// Parent directories are created as needed. An existing file is left
/// alone unless `force` is set.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(DaybookError::ConfigExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, starter_config())?;
    println!("Writing to config: {}", path.display());

    Ok(())
}

fn starter_config() -> String {
    format!(
        "# daybook configuration\n\
         \n\
         # Directory your journal files live in; must exist (~ is expanded)\n\
         journal_directory = \"~/journals\"\n\
         \n\
         # Editor command used for editing sessions\n\
         preferred_editor = \"{}\"\n\
         \n\
         # strftime pattern for journal file names\n\
         date_format = \"%Y-%m-%d\"\n\
         \n\
         # File extension without the leading dot\n\
         file_extension = \"md\"\n\
         \n\
         # Uncomment to override where scratch copies are kept\n\
         # scratch_directory = \"/tmp/daybook\"\n\
         \n\
         # Hook names to run at each lifecycle stage, in order\n\
         [hooks]\n\
         created = [\"date-header\"]\n\
         opened = [\"timestamp\"]\n\
         saved = []\n\
         closed = []\n\
         \n\
         # Per-plugin settings\n\
         [plugins.date-header]\n\
         format = \"%Y-%m-%d\"\n",
        config::detect_default_editor()
    )
}
