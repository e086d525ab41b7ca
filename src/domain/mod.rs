//! Domain layer - Date phrases and journal naming

pub mod journal;
pub mod number;
pub mod phrase;

pub use phrase::DatePhrase;
