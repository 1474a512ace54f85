//! # templo - TEMPLO gym AI assistant
//!
//! `templo` is a terminal chat assistant for TEMPLO gym (Cochabamba, Bolivia).
//! Questions go to an OpenAI-compatible chat completion endpoint (Groq by
//! default) and answers stream back as they are generated.
//!
//! ## Features
//!
//! - **Streaming answers**: replies render fragment by fragment
//! - **Bilingual**: English or Español persona, switchable with `/lang`
//! - **Query log**: every question is recorded and exportable as CSV with `/export`
//! - **Gym info**: `/book` and `/schedule` (also `templo book`, `templo schedule`)
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="gsk_..."
//! templo
//!
//! # Start in Spanish
//! templo --lang es
//! ```
//!
//! ## Configuration
//!
//! The API key is read from `~/.config/templo/secrets.toml` first and from the
//! environment (or a local `.env`) second:
//!
//! ```toml
//! GROQ_API_KEY = "gsk_..."
//! ```
//!
//! Optional settings live in `~/.config/templo/config.toml`:
//!
//! ```toml
//! [templo]
//! model = "llama-3.3-70b-versatile"
//! language = "Español"
//! ```

/// Interactive chat mode (REPL and slash commands).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Streaming chat completion client and reply accumulation.
pub mod completion;

/// Configuration file and API key resolution.
pub mod config;

/// CSV export of the query log.
pub mod export;

/// File system utilities.
pub mod fs;

/// Static gym information (booking link, schedule).
pub mod gym;

/// Global output configuration (quiet mode, colors, diagnostics).
pub mod output;

/// XDG-style path utilities for configuration and secrets.
pub mod paths;

/// Conversation state: transcript, query log, language.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
