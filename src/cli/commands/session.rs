//! Interactive verification session.
//!
//! Each stdin line is either text to verify or a `:`-prefixed command.
//! Notifications are printed to stderr as they are posted.

use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

use crate::cli::commands::build_orchestrator;
use crate::cli::commands::history::HistoryListOutput;
use crate::cli::commands::verify::{DisplayOutput, VerdictOutput};
use crate::cli::display::{dim, output, render_notification};
use crate::cli::output::create_spinner_with_message;
use crate::domain::models::{Config, NotificationEvent};

const HELP: &str = "\
Type text and press Enter to verify it.
  :history     list history entries
  :select N    replay history entry N
  :clear       delete all history
  :help        show this help
  :quit        leave the session";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Verify(String),
    History,
    Select(usize),
    Clear,
    Help,
    Quit,
    Invalid(String),
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Self::Verify(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("history" | "h"), None, _) => Self::History,
            (Some("select" | "s"), Some(n), None) => n
                .parse()
                .map_or_else(|_| Self::Invalid(format!("not an index: {n}")), Self::Select),
            (Some("clear"), None, _) => Self::Clear,
            (Some("help" | "?"), None, _) => Self::Help,
            (Some("quit" | "q" | "exit"), None, _) => Self::Quit,
            _ => Self::Invalid(format!("unknown command: {trimmed}")),
        }
    }
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let mut orchestrator = build_orchestrator(config).await?;

    let mut events = orchestrator.notifier().subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(NotificationEvent::Posted(notification)) => {
                    eprintln!("{}", render_notification(&notification, json_mode));
                }
                Ok(NotificationEvent::Expired { id }) => debug!(%id, "notification expired"),
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "notification printer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    info!(entries = orchestrator.history().len(), "session started");
    if !json_mode {
        println!("{}", dim(HELP));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !json_mode {
            print!("> ");
            std::io::stdout().flush().context("Failed to flush stdout")?;
        }
        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        match SessionInput::parse(&line) {
            SessionInput::Quit => break,
            SessionInput::Help => println!("{HELP}"),
            SessionInput::Invalid(reason) => eprintln!("{reason} (try :help)"),
            SessionInput::History => {
                output(
                    &HistoryListOutput::from_store(orchestrator.history(), None),
                    json_mode,
                );
            }
            SessionInput::Select(index) => {
                if orchestrator.select_history(index).is_ok() {
                    output(&DisplayOutput::from_orchestrator(&orchestrator), json_mode);
                }
            }
            SessionInput::Clear => {
                // Failures are reported through notifications.
                let _ = orchestrator.clear_history().await;
            }
            SessionInput::Verify(text) => {
                let spinner = (!json_mode).then(|| create_spinner_with_message("Verifying..."));
                let outcome = orchestrator.submit(&text).await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
                match outcome {
                    Ok(result) => output(&VerdictOutput::new(text.trim(), &result), json_mode),
                    Err(_) if orchestrator.error_message().is_some() => {
                        output(&DisplayOutput::from_orchestrator(&orchestrator), json_mode);
                    }
                    Err(_) => {}
                }
            }
        }
    }

    printer.abort();
    info!("session ended");
    Ok(())
}
