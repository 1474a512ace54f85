//! Per-session conversation state: transcript, query log and selected language.

mod language;
mod query_log;
mod state;
mod transcript;

pub use language::{Language, print_languages};
pub use query_log::{QueryLog, QueryRecord, TIMESTAMP_FORMAT};
pub use state::SessionState;
pub use transcript::{Message, Role, Transcript};
