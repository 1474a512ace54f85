//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands for the gym's
//! informational actions, language selection and query export.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
