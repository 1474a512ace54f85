use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt, mapping user cancellation to `Ok(None)`.
///
/// If the user cancels the prompt (Ctrl+C or Escape), a newline is printed to
/// clean up the terminal. Any other prompt failure is returned as an error.
pub fn prompt_or_cancel<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T, InquireError>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
