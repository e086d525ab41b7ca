//! daybook - Journaling helper that understands English date phrases
//!
//! Resolves phrases like "yesterday" or "two days ago" to a dated journal
//! file, edits it through a scratch copy in an external editor, and runs
//! named hooks at the created/opened/saved/closed points of a session.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
