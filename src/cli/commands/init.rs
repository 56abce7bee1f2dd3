//! Implementation of the `verity init` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::CONFIG_DIR;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub directories_created: Vec<String>,
    pub config_written: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![action_success(&self.message)];
        if !self.directories_created.is_empty() {
            lines.push("\nCreated directories:".to_string());
            for dir in &self.directories_created {
                lines.push(format!("  - {dir}"));
            }
        }
        if self.config_written {
            lines.push(format!("\nConfiguration written to {CONFIG_DIR}/config.yaml"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let out = initialize(args).await?;
    output(&out, json_mode);
    Ok(())
}

async fn initialize(args: InitArgs) -> Result<InitOutput> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let verity_dir = target_path.join(CONFIG_DIR);
    let config_path = verity_dir.join("config.yaml");

    if config_path.exists() && !args.force {
        bail!("Project already initialized. Use --force to reinitialize.");
    }

    let defaults = Config::default();
    let mut directories_created = vec![];

    let dirs = [verity_dir.clone(), target_path.join(&defaults.history.storage_dir)];
    for dir in &dirs {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let relative = dir
                .strip_prefix(&target_path)
                .unwrap_or(dir)
                .to_string_lossy()
                .to_string();
            directories_created.push(relative);
        }
    }

    let yaml = serde_yaml::to_string(&defaults).context("Failed to serialize default config")?;
    fs::write(&config_path, yaml)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(InitOutput {
        success: true,
        message: if args.force {
            "Project reinitialized successfully.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        initialized_path: target_path,
        directories_created,
        config_written: true,
    })
}
