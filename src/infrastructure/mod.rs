//! Infrastructure layer - Configuration, filesystem, and process I/O

pub mod config;
pub mod editor;
pub mod hooks;
pub mod plugins;
pub mod scratch;

pub use config::Settings;
pub use editor::EditorCommand;
pub use hooks::{HookRegistry, JournalHook, Stage};
pub use scratch::ScratchCopy;
