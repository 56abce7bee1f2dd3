//! Implementation of the `verity verify` command.

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::commands::{build_orchestrator, CliOrchestrator};
use crate::cli::display::{
    colorize_verdict, dim, output, render_notification, CommandOutput,
};
use crate::cli::output::{create_spinner_with_message, hidden_spinner};
use crate::domain::models::{Config, Severity, VerificationResult, CONFIDENCE_UNAVAILABLE};
use crate::services::ResultDisplay;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Text to verify; several words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl VerifyArgs {
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// A verdict as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictOutput {
    pub input: String,
    pub is_correct: bool,
    pub confidence: Option<u8>,
    pub explanation: String,
    pub correction: String,
}

impl VerdictOutput {
    pub fn new(input: impl Into<String>, result: &VerificationResult) -> Self {
        Self {
            input: input.into(),
            is_correct: result.is_correct(),
            confidence: result.confidence(),
            explanation: result.explanation().to_string(),
            correction: result.correction().to_string(),
        }
    }

    fn confidence_label(&self) -> String {
        self.confidence
            .map_or_else(|| CONFIDENCE_UNAVAILABLE.to_string(), |c| format!("{c}%"))
    }
}

impl CommandOutput for VerdictOutput {
    fn to_human(&self) -> String {
        [
            format!(
                "{}  {} {}",
                colorize_verdict(self.is_correct),
                dim("confidence"),
                self.confidence_label()
            ),
            format!("{} {}", dim("Input:      "), self.input),
            format!("{} {}", dim("Explanation:"), self.explanation),
            format!("{} {}", dim("Correction: "), self.correction),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// The orchestrator's result area.
#[derive(Debug, Serialize)]
pub struct DisplayOutput {
    pub state: String,
    #[serde(flatten)]
    pub display: ResultDisplay,
}

impl DisplayOutput {
    pub fn from_orchestrator(orchestrator: &CliOrchestrator) -> Self {
        Self {
            state: orchestrator.state().to_string(),
            display: orchestrator.display().clone(),
        }
    }
}

impl CommandOutput for DisplayOutput {
    fn to_human(&self) -> String {
        match &self.display {
            ResultDisplay::Empty => "No result to show.".to_string(),
            ResultDisplay::Verdict { input, result } => {
                VerdictOutput::new(input.clone(), result).to_human()
            }
            ResultDisplay::Error { message } => crate::cli::display::action_failure(message),
            ResultDisplay::Pending { input } => {
                format!("{} {}\n{}", dim("Input:"), input, dim("(no verdict recorded)"))
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print notifications that are not already conveyed by the command output.
pub fn print_notifications(orchestrator: &CliOrchestrator, json_mode: bool) {
    for notification in orchestrator.notifier().live() {
        if notification.severity == Severity::Success {
            continue;
        }
        eprintln!("{}", render_notification(&notification, json_mode));
    }
}

pub async fn execute(args: VerifyArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut orchestrator = build_orchestrator(config).await?;
    let text = args.text();

    let spinner = if json_mode {
        hidden_spinner()
    } else {
        create_spinner_with_message("Verifying...")
    };
    let outcome = orchestrator.submit(&text).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(result) => {
            output(&VerdictOutput::new(text.trim(), &result), json_mode);
            print_notifications(&orchestrator, json_mode);
            Ok(())
        }
        Err(err) => Err(anyhow!(err.notification_message())),
    }
}
