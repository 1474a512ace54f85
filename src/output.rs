//! Global output configuration, diagnostics logging and print helpers.
//!
//! - Assistant replies and informational blocks go to stdout
//! - Status messages go to stderr, notices to stdout; both are silenced by `--quiet`
//! - Errors always go to stderr
//! - Colors can be disabled via `--no-color` or the `NO_COLOR` environment variable
//! - Diagnostics go through `tracing` to stderr, filtered by `RUST_LOG`
//!   (default `warn`, `--verbose` raises it to `debug`)

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
    /// Emit debug diagnostics.
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
            verbose: false,
        }
    }
}

/// Initializes output settings and the diagnostics subscriber.
///
/// Call once at startup with the CLI flags; later calls are ignored.
pub fn init(config: OutputConfig) {
    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
///
/// Use this for confirmations such as "Exported 3 queries".
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print an informational notice to stdout (respects quiet mode).
///
/// Use this for answers to user actions that are not errors, such as an
/// export request with nothing to export.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            println!($($arg)*);
        }
    };
}

/// Flush stdout, ignoring failures (used while a reply streams in).
pub fn flush_stdout() {
    let _ = io::stdout().flush();
}
