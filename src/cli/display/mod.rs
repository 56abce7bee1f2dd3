//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors, tables and notification rendering used by
//! every command.

pub mod colors;
pub mod table;

use console::style;
use serde::Serialize;

use crate::domain::models::Notification;

pub use colors::*;
pub use table::*;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a success action result.
pub fn action_success(message: &str) -> String {
    format!("{} {}", style("\u{2713}").green().bold(), message)
}

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", style("\u{2717}").red().bold(), message)
}

/// One notification as a single stderr line.
pub fn render_notification(notification: &Notification, json_mode: bool) -> String {
    if json_mode {
        return serde_json::to_string(notification).unwrap_or_default();
    }
    format!(
        "{} {}",
        severity_marker(notification.severity),
        notification.message
    )
}

/// Truncate a string to at most `max_len` characters, appending "..." if
/// truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
