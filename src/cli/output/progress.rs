//! Spinner utilities using indicatif for terminal output
//!
//! Verification calls have no known length, so only spinners are offered.
//! Spinners draw to stderr and stay hidden when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner for indeterminate operations
///
/// # Example
/// ```
/// use verity::cli::output::progress::create_spinner;
///
/// let spinner = create_spinner();
/// spinner.set_message("Verifying...");
/// // do work
/// spinner.finish_and_clear();
/// ```
pub fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(SPINNER_CHARS),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Create a spinner with a custom message
pub fn create_spinner_with_message(message: impl Into<String>) -> ProgressBar {
    let spinner = create_spinner();
    spinner.set_message(message.into());
    spinner
}

/// A spinner that never draws, for JSON mode.
pub fn hidden_spinner() -> ProgressBar {
    ProgressBar::hidden()
}
