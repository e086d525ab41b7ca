//! Scratch copies and content fingerprints

use crate::error::{DaybookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A transient working copy of a journal file.
///
/// Created with exclusive semantics so a leftover scratch file from a
/// concurrent or crashed session is detected instead of clobbered. The
/// file is removed when the value is dropped, which covers error paths
/// as well as the normal end of a session.
#[derive(Debug)]
pub struct ScratchCopy {
    path: PathBuf,
}

impl ScratchCopy {
    /// Exclusively create an empty scratch file for `filename`.
    ///
    /// The scratch directory is created on demand. An already existing
    /// scratch file means another session owns this journal.
    pub fn create(scratch_dir: &Path, filename: &str) -> Result<Self> {
        fs::create_dir_all(scratch_dir)?;
        let path = scratch_dir.join(filename);

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(DaybookError::DuplicateSession(path))
            }
            Err(e) => Err(DaybookError::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    pub fn write(&self, content: &str) -> Result<()> {
        Ok(fs::write(&self.path, content)?)
    }

    /// Current content as lines, per the crate's line convention
    pub fn read_lines(&self) -> Result<Vec<String>> {
        Ok(split_lines(&self.read()?))
    }

    /// Replace the content with `lines`, full truncate-and-rewrite
    pub fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.write(&join_lines(lines))
    }

    /// BLAKE3 hash of the current content as a hex string
    pub fn fingerprint(&self) -> Result<String> {
        let content = fs::read(&self.path)?;
        Ok(blake3::hash(&content).to_hex().to_string())
    }
}

impl Drop for ScratchCopy {
    fn drop(&mut self) {
        // Best effort; a scratch file that already vanished is fine
        let _ = fs::remove_file(&self.path);
    }
}

/// Split content into lines. A trailing newline does not produce a
/// phantom empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Rejoin lines with `\n` and a single trailing newline when non-empty
pub fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        let mut joined = lines.join("\n");
        joined.push('\n');
        joined
    }
}
