//! Verity CLI entry point.

use clap::Parser;

use verity::cli::commands;
use verity::cli::{Cli, Commands};
use verity::infrastructure::config::ConfigLoader;
use verity::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command, cli.json).await {
        verity::cli::handle_error(err, cli.json);
    }
}

async fn run(command: Commands, json_mode: bool) -> anyhow::Result<()> {
    // init must work before any configuration exists
    if let Commands::Init(args) = command {
        return commands::init::execute(args, json_mode).await;
    }

    let config = ConfigLoader::load()?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    match command {
        Commands::Init(args) => commands::init::execute(args, json_mode).await,
        Commands::Verify(args) => commands::verify::execute(args, &config, json_mode).await,
        Commands::History(args) => commands::history::execute(args, &config, json_mode).await,
        Commands::Models => commands::models::execute(&config, json_mode).await,
        Commands::Session => commands::session::execute(&config, json_mode).await,
    }
}
