//! Severity and verdict styling for CLI output.

use console::{style, StyledObject};

use crate::domain::models::Severity;

/// Colored marker shown in front of a notification.
///
/// Info = blue, Success = green, Warning = yellow, Error = red bold.
pub fn severity_marker(severity: Severity) -> StyledObject<&'static str> {
    match severity {
        Severity::Info => style("i").blue(),
        Severity::Success => style("\u{2713}").green(),
        Severity::Warning => style("!").yellow().bold(),
        Severity::Error => style("\u{2717}").red().bold(),
    }
}

/// Verdict label, green for correct and red for incorrect.
pub fn colorize_verdict(is_correct: bool) -> StyledObject<&'static str> {
    if is_correct {
        style("Correct").green().bold()
    } else {
        style("Incorrect").red().bold()
    }
}

/// Dimmed text for secondary values.
pub fn dim<D>(value: D) -> StyledObject<D> {
    style(value).dim()
}
