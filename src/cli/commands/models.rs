//! Implementation of the `verity models` command.

use anyhow::{Context, Result};
use comfy_table::Cell;
use serde::Serialize;

use crate::adapters::http::HttpVerificationClient;
use crate::cli::display::{list_table, output, render_list, truncate, CommandOutput};
use crate::cli::output::{create_spinner_with_message, hidden_spinner};
use crate::domain::models::Config;
use crate::domain::ports::{ModelInfo, VerificationService};

#[derive(Debug, Serialize)]
pub struct ModelsOutput {
    pub models: Vec<ModelInfo>,
    pub total: usize,
}

impl CommandOutput for ModelsOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["Name", "Input tokens", "Output tokens", "Description"]);
        for model in &self.models {
            table.add_row(vec![
                Cell::new(&model.name),
                Cell::new(limit_label(model.input_token_limit)),
                Cell::new(limit_label(model.output_token_limit)),
                Cell::new(truncate(&model.description, 60)),
            ]);
        }
        render_list("model", "models", &table, self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn limit_label(limit: Option<u64>) -> String {
    limit.map_or_else(|| "-".to_string(), |l| l.to_string())
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let client = HttpVerificationClient::new(&config.service)
        .context("Failed to create verification client")?;

    let spinner = if json_mode {
        hidden_spinner()
    } else {
        create_spinner_with_message("Fetching models...")
    };
    let models = client.list_models().await;
    spinner.finish_and_clear();

    let models = models.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let out = ModelsOutput {
        total: models.len(),
        models,
    };
    output(&out, json_mode);
    Ok(())
}
