//! History CLI commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::verify::{print_notifications, DisplayOutput};
use crate::cli::commands::{build_orchestrator, open_history};
use crate::cli::display::{
    action_success, colorize_verdict, list_table, output, render_list, truncate, CommandOutput,
};
use crate::domain::models::{Config, HistoryEntry};
use crate::domain::ports::KeyValueStore;
use crate::services::HistoryStore;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List history entries, most recent first
    List {
        /// Maximum number of entries to display
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Replay a history entry without contacting the service
    Show {
        /// Entry index as shown by `history list` (0 = most recent)
        index: usize,
    },
    /// Delete every history entry
    Clear,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryOutput {
    pub index: usize,
    pub id: String,
    pub timestamp: String,
    pub input: String,
    pub is_correct: Option<bool>,
    pub confidence: Option<u8>,
}

impl HistoryEntryOutput {
    pub fn new(index: usize, entry: &HistoryEntry) -> Self {
        Self {
            index,
            id: entry.id.to_string(),
            timestamp: entry.created_at.to_rfc3339(),
            input: entry.input_text.clone(),
            is_correct: entry.result.as_ref().map(|r| r.is_correct()),
            confidence: entry.result.as_ref().and_then(|r| r.confidence()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryListOutput {
    pub entries: Vec<HistoryEntryOutput>,
    pub total: usize,
    pub capacity: usize,
}

impl HistoryListOutput {
    /// Up to `limit` entries of `history`, most recent first.
    pub fn from_store<S: KeyValueStore>(history: &HistoryStore<S>, limit: Option<usize>) -> Self {
        Self {
            entries: history
                .entries()
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .enumerate()
                .map(|(i, e)| HistoryEntryOutput::new(i, e))
                .collect(),
            total: history.len(),
            capacity: history.capacity(),
        }
    }
}

impl CommandOutput for HistoryListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["#", "When", "Verdict", "Confidence", "Input"]);
        for entry in &self.entries {
            let verdict = entry
                .is_correct
                .map_or_else(|| "-".to_string(), |c| colorize_verdict(c).to_string());
            table.add_row(vec![
                Cell::new(entry.index),
                Cell::new(short_timestamp(&entry.timestamp)),
                Cell::new(verdict),
                Cell::new(entry.confidence.map_or_else(|| "-".to_string(), |c| format!("{c}%"))),
                Cell::new(truncate(&entry.input, 50)),
            ]);
        }
        render_list("history entry", "history entries", &table, self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryShowOutput {
    pub entry: HistoryEntryOutput,
    pub result: DisplayOutput,
}

impl CommandOutput for HistoryShowOutput {
    fn to_human(&self) -> String {
        format!(
            "Entry {} ({})\n{}",
            self.entry.index,
            short_timestamp(&self.entry.timestamp),
            self.result.to_human()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryClearOutput {
    pub success: bool,
    pub message: String,
}

impl CommandOutput for HistoryClearOutput {
    fn to_human(&self) -> String {
        action_success(&self.message)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn short_timestamp(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339).map_or_else(
        |_| rfc3339.to_string(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    )
}

pub async fn execute(args: HistoryArgs, config: &Config, json_mode: bool) -> Result<()> {
    match args.command {
        HistoryCommands::List { limit } => {
            let history = open_history(config).await;
            output(&HistoryListOutput::from_store(&history, limit), json_mode);
        }

        HistoryCommands::Show { index } => {
            let mut orchestrator = build_orchestrator(config).await?;
            let entry = orchestrator
                .select_history(index)
                .map_err(|e| anyhow!(e.notification_message()))?;

            let out = HistoryShowOutput {
                entry: HistoryEntryOutput::new(index, &entry),
                result: DisplayOutput::from_orchestrator(&orchestrator),
            };
            output(&out, json_mode);
            print_notifications(&orchestrator, json_mode);
        }

        HistoryCommands::Clear => {
            let mut orchestrator = build_orchestrator(config).await?;
            let removed = orchestrator.history().len();
            orchestrator.clear_history().await?;

            let out = HistoryClearOutput {
                success: true,
                message: format!("History cleared ({removed} entries removed)."),
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}
