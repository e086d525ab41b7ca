//! Journal hooks: trait, registry, and lifecycle stage resolution

use crate::error::{DaybookError, Result};
use crate::infrastructure::config::HookSettings;
use crate::infrastructure::plugins;
use std::fmt;
use std::path::Path;

/// The four lifecycle points at which hooks run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Created,
    Opened,
    Saved,
    Closed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Created => "created",
            Stage::Opened => "opened",
            Stage::Saved => "saved",
            Stage::Closed => "closed",
        };
        write!(f, "{}", name)
    }
}

/// Trait for plugins that rewrite journal content at lifecycle stages
pub trait JournalHook: Send + Sync {
    /// Name matching the hook lists in configuration
    fn name(&self) -> &str;

    /// Transform the content; `None` means no changes
    fn apply(&self, lines: &[String], config: Option<&toml::Table>)
        -> Result<Option<Vec<String>>>;
}

impl fmt::Debug for dyn JournalHook + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalHook")
            .field("name", &self.name())
            .finish()
    }
}

/// Registry for resolving configured hook names
pub struct HookRegistry {
    hooks: Vec<Box<dyn JournalHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registry preloaded with the built-in plugins
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(plugins::DateHeader);
        registry.register(plugins::Timestamp);
        registry
    }

    /// Register a new hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: JournalHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Look up a configured hook name. Unknown names are fatal and the
    /// error points at the configuration file that listed them.
    pub fn resolve(&self, name: &str, config_path: &Path) -> Result<&dyn JournalHook> {
        self.hooks
            .iter()
            .map(|hook| hook.as_ref())
            .find(|hook| hook.name() == name)
            .ok_or_else(|| DaybookError::PluginNotFound {
                name: name.to_string(),
                path: config_path.to_path_buf(),
            })
    }

    /// Resolve one stage's name list in declaration order
    pub fn resolve_all<'a>(
        &'a self,
        names: &[String],
        config_path: &Path,
    ) -> Result<Vec<&'a dyn JournalHook>> {
        names
            .iter()
            .map(|name| self.resolve(name, config_path))
            .collect()
    }

    /// Resolve every configured stage list up front, so an unknown name
    /// fails before any filesystem work.
    pub fn resolve_stages<'a>(
        &'a self,
        hooks: &HookSettings,
        config_path: &Path,
    ) -> Result<StageHooks<'a>> {
        Ok(StageHooks {
            created: self.resolve_all(&hooks.created, config_path)?,
            opened: self.resolve_all(&hooks.opened, config_path)?,
            saved: self.resolve_all(&hooks.saved, config_path)?,
            closed: self.resolve_all(&hooks.closed, config_path)?,
        })
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Hooks resolved per lifecycle stage, in configured order
#[derive(Debug)]
pub struct StageHooks<'a> {
    pub created: Vec<&'a dyn JournalHook>,
    pub opened: Vec<&'a dyn JournalHook>,
    pub saved: Vec<&'a dyn JournalHook>,
    pub closed: Vec<&'a dyn JournalHook>,
}

impl<'a> StageHooks<'a> {
    pub fn for_stage(&self, stage: Stage) -> &[&'a dyn JournalHook] {
        match stage {
            Stage::Created => &self.created,
            Stage::Opened => &self.opened,
            Stage::Saved => &self.saved,
            Stage::Closed => &self.closed,
        }
    }
}
