//! Editor integration for journal editing sessions

use crate::error::{DaybookError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// The configured editor command, invoked blocking on a scratch file
pub struct EditorCommand {
    command: String,
}

impl EditorCommand {
    /// Create an editor command from the configured string
    pub fn new(command: String) -> Self {
        EditorCommand { command }
    }

    /// Open a file in the editor and block until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();
        debug!("Launching editor: {} {:?}", self.command, file_path);

        let status = self.build(&program, &args, file_path).status();

        match status {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DaybookError::EditorNotFound(program))
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(DaybookError::EditorPermission(program))
            }
            Err(e) => Err(DaybookError::EditorLaunch {
                command: self.command.clone(),
                source: e,
            }),
            Ok(status) if !status.success() => {
                // Not fatal; the content hash decides whether anything
                // was saved.
                warn!(
                    "Editor '{}' exited with status {}",
                    self.command,
                    status.code().unwrap_or(-1)
                );
                Ok(())
            }
            Ok(_) => Ok(()),
        }
    }

    fn build(&self, program: &str, args: &[String], file_path: &Path) -> Command {
        // On Windows, use cmd /C to ensure .bat and .cmd files are found
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(program).args(args).arg(file_path);
            cmd
        }

        #[cfg(not(windows))]
        {
            let mut cmd = Command::new(program);
            cmd.args(args).arg(file_path);
            cmd
        }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
