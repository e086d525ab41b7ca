//! Open journal use case - the edit session lifecycle

use crate::error::{DaybookError, Result};
use crate::infrastructure::config::Settings;
use crate::infrastructure::hooks::{HookRegistry, Stage, StageHooks};
use crate::infrastructure::scratch::ScratchCopy;
use crate::infrastructure::EditorCommand;
use std::fs;
use tracing::debug;

/// An edit session over a single journal file.
///
/// Stages run in order: created (new journals only), opened, the
/// blocking editor, saved (only when the editor changed the content),
/// closed (always).
#[derive(Debug)]
pub struct JournalSession<'a> {
    settings: &'a Settings,
    stages: StageHooks<'a>,
}

impl<'a> JournalSession<'a> {
    /// Resolve the configured hook names against the registry. Unknown
    /// names fail here, before any filesystem work.
    pub fn new(settings: &'a Settings, registry: &'a HookRegistry) -> Result<Self> {
        let stages = registry.resolve_stages(&settings.hooks, &settings.source_path)?;
        Ok(JournalSession { settings, stages })
    }

    /// Run the full edit lifecycle for `filename`
    pub fn open(&self, filename: &str) -> Result<()> {
        // 1. The journal directory is never silently created
        if !self.settings.journal_directory.is_dir() {
            return Err(DaybookError::JournalDirMissing(
                self.settings.journal_directory.clone(),
            ));
        }

        let target = self.settings.journal_directory.join(filename);
        debug!("Opening journal {:?}", target);

        // 2. Exclusive scratch creation doubles as the duplicate-session check
        let scratch = ScratchCopy::create(&self.settings.scratch_directory, filename)?;

        // 3.-4. Seed the scratch copy; brand-new journals get the created
        // hooks instead of existing content
        if target.exists() {
            fs::copy(&target, scratch.path())?;
        } else {
            self.run_stage(Stage::Created, &scratch)?;
        }

        // 5. Opened hooks see the seeded content
        self.run_stage(Stage::Opened, &scratch)?;

        // 6. Fingerprint after the pre-edit hooks; this is what "unchanged"
        // means for the save decision
        let before = scratch.fingerprint()?;

        // 7. Block until the editor exits
        let editor = EditorCommand::new(self.settings.preferred_editor.clone());
        editor.edit(scratch.path())?;

        // 8. Write back only when the editor changed something
        let after = scratch.fingerprint()?;
        let written = if after != before {
            self.run_stage(Stage::Saved, &scratch)?;
            fs::copy(scratch.path(), &target)?;
            scratch.fingerprint()?
        } else {
            before.clone()
        };

        // 9. Closed hooks always run; a closed-stage rewrite reaches the
        // journal too
        self.run_stage(Stage::Closed, &scratch)?;
        let final_state = scratch.fingerprint()?;
        if final_state != before && final_state != written {
            fs::copy(scratch.path(), &target)?;
        }

        // 10. The scratch guard removes its file on drop
        Ok(())
    }

    /// Run one stage's hooks sequentially; each hook's output feeds the
    /// next. A failing hook is reported and the stage continues.
    fn run_stage(&self, stage: Stage, scratch: &ScratchCopy) -> Result<()> {
        let hooks = self.stages.for_stage(stage);
        if hooks.is_empty() {
            return Ok(());
        }

        debug!("Running {} hook(s) for stage '{}'", hooks.len(), stage);
        let mut lines = scratch.read_lines()?;

        for hook in hooks {
            let config = self.settings.plugin_config(hook.name());
            match hook.apply(&lines, config) {
                Ok(Some(updated)) => {
                    lines = updated;
                    scratch.write_lines(&lines)?;
                    println!("{} ran; changes applied!", hook.name());
                }
                Ok(None) => {
                    println!("{} ran; no changes made", hook.name());
                }
                Err(e) => {
                    eprintln!("Warning: Hook '{}' failed: {}", hook.name(), e);
                    // Continue with other hooks even if one fails
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::HookSettings;
    use crate::infrastructure::hooks::JournalHook;
    #[cfg(unix)]
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Shout;

    impl JournalHook for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn apply(
            &self,
            _lines: &[String],
            _config: Option<&toml::Table>,
        ) -> Result<Option<Vec<String>>> {
            Ok(Some(vec!["HELLO WORLD".to_string()]))
        }
    }

    struct Failing;

    impl JournalHook for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn apply(
            &self,
            _lines: &[String],
            _config: Option<&toml::Table>,
        ) -> Result<Option<Vec<String>>> {
            Err(DaybookError::InvalidConfigValue {
                key: "failing".to_string(),
                reason: "always fails".to_string(),
            })
        }
    }

    /// Settings wired to a true-editor stand-in, so `open` runs the whole
    /// lifecycle without an interactive process.
    fn test_settings(temp: &TempDir, hooks: HookSettings) -> Settings {
        let journal_dir = temp.path().join("journals");
        fs::create_dir_all(&journal_dir).unwrap();

        Settings {
            journal_directory: journal_dir,
            preferred_editor: "true".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            file_extension: "md".to_string(),
            scratch_directory: temp.path().join("scratch"),
            hooks,
            plugins: toml::Table::new(),
            source_path: temp.path().join("config.toml"),
        }
    }

    fn no_hooks() -> HookSettings {
        HookSettings::default()
    }

    #[test]
    fn test_missing_journal_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let mut settings = test_settings(&temp, no_hooks());
        settings.journal_directory = temp.path().join("does-not-exist");

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();

        let err = session.open("2024-03-10.md").unwrap_err();
        match err {
            DaybookError::JournalDirMissing(path) => {
                assert_eq!(path, temp.path().join("does-not-exist"));
            }
            other => panic!("Expected JournalDirMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_hook_fails_before_any_filesystem_work() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.opened = vec!["ghost".to_string()];
        let settings = test_settings(&temp, hooks);

        let registry = HookRegistry::with_builtins();
        let err = JournalSession::new(&settings, &registry).unwrap_err();

        assert!(matches!(err, DaybookError::PluginNotFound { .. }));
        assert!(!settings.scratch_directory.exists());
    }

    #[test]
    fn test_duplicate_scratch_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let settings = test_settings(&temp, no_hooks());

        let target = settings.journal_directory.join("2024-03-10.md");
        fs::write(&target, "original\n").unwrap();

        fs::create_dir_all(&settings.scratch_directory).unwrap();
        fs::write(settings.scratch_directory.join("2024-03-10.md"), "stale").unwrap();

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();

        let err = session.open("2024-03-10.md").unwrap_err();
        assert!(matches!(err, DaybookError::DuplicateSession(_)));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original\n");
        // The stale scratch file is evidence, not ours to delete
        assert!(settings.scratch_directory.join("2024-03-10.md").exists());
    }

    #[test]
    fn test_no_edit_session_leaves_existing_target_byte_identical() {
        let temp = TempDir::new().unwrap();
        let settings = test_settings(&temp, no_hooks());

        let target = settings.journal_directory.join("2024-03-10.md");
        fs::write(&target, "day one\nday two\n").unwrap();

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-10.md").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "day one\nday two\n");
        assert!(!settings.scratch_directory.join("2024-03-10.md").exists());
    }

    #[test]
    fn test_no_edit_session_creates_no_new_journal() {
        let temp = TempDir::new().unwrap();
        let settings = test_settings(&temp, no_hooks());

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-10.md").unwrap();

        assert!(!settings.journal_directory.join("2024-03-10.md").exists());
    }

    #[test]
    fn test_closed_hook_rewrite_reaches_the_journal() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.closed = vec!["shout".to_string()];
        let settings = test_settings(&temp, hooks);

        let target = settings.journal_directory.join("2024-03-10.md");
        fs::write(&target, "quiet words\n").unwrap();

        let mut registry = HookRegistry::with_builtins();
        registry.register(Shout);

        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-10.md").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "HELLO WORLD\n");
    }

    #[test]
    fn test_failing_hook_does_not_abort_the_session() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.closed = vec!["failing".to_string(), "shout".to_string()];
        let settings = test_settings(&temp, hooks);

        let target = settings.journal_directory.join("2024-03-10.md");
        fs::write(&target, "quiet words\n").unwrap();

        let mut registry = HookRegistry::with_builtins();
        registry.register(Shout);
        registry.register(Failing);

        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-10.md").unwrap();

        // The failing hook is skipped; the later hook still runs
        assert_eq!(fs::read_to_string(&target).unwrap(), "HELLO WORLD\n");
    }

    #[test]
    fn test_created_hooks_run_only_for_new_journals() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.created = vec!["shout".to_string()];
        let settings = test_settings(&temp, hooks);

        let target = settings.journal_directory.join("existing.md");
        fs::write(&target, "already here\n").unwrap();

        let mut registry = HookRegistry::with_builtins();
        registry.register(Shout);

        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("existing.md").unwrap();

        // Existing journal: created hooks skipped, nothing changed
        assert_eq!(fs::read_to_string(&target).unwrap(), "already here\n");
    }

    #[cfg(unix)]
    fn path_to_string(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[cfg(unix)]
    fn script_editor(temp: &TempDir, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = temp.path().join("editor.sh");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[cfg(unix)]
    #[test]
    fn test_edited_content_is_written_back() {
        let temp = TempDir::new().unwrap();
        let mut settings = test_settings(&temp, no_hooks());

        let script = script_editor(&temp, "echo appended >> \"$1\"");
        settings.preferred_editor = path_to_string(&script);

        let target = settings.journal_directory.join("2024-03-10.md");
        fs::write(&target, "first line\n").unwrap();

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-10.md").unwrap();

        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "first line\nappended\n"
        );
        assert!(!settings.scratch_directory.join("2024-03-10.md").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_journal_is_created_after_editing() {
        let temp = TempDir::new().unwrap();
        let mut settings = test_settings(&temp, no_hooks());

        let script = script_editor(&temp, "echo 'dear diary' > \"$1\"");
        settings.preferred_editor = path_to_string(&script);

        let registry = HookRegistry::with_builtins();
        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-11.md").unwrap();

        let target = settings.journal_directory.join("2024-03-11.md");
        assert_eq!(fs::read_to_string(&target).unwrap(), "dear diary\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_hooks_transform_edited_content() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.saved = vec!["shout".to_string()];
        let mut settings = test_settings(&temp, hooks);

        let script = script_editor(&temp, "echo whispered > \"$1\"");
        settings.preferred_editor = path_to_string(&script);

        let target = settings.journal_directory.join("2024-03-12.md");
        fs::write(&target, "start\n").unwrap();

        let mut registry = HookRegistry::with_builtins();
        registry.register(Shout);

        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-12.md").unwrap();

        // The saved hook ran on the edited content before the write-back
        assert_eq!(fs::read_to_string(&target).unwrap(), "HELLO WORLD\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_hooks_skipped_without_edits() {
        let temp = TempDir::new().unwrap();
        let mut hooks = no_hooks();
        hooks.saved = vec!["shout".to_string()];
        let settings = test_settings(&temp, hooks);

        let target = settings.journal_directory.join("2024-03-13.md");
        fs::write(&target, "untouched\n").unwrap();

        let mut registry = HookRegistry::with_builtins();
        registry.register(Shout);

        let session = JournalSession::new(&settings, &registry).unwrap();
        session.open("2024-03-13.md").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "untouched\n");
    }
}
