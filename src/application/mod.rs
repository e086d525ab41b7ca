//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod open_journal;

pub use manage_config::ConfigService;
pub use open_journal::JournalSession;
