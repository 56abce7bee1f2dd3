//! CLI type definitions
//!
//! Top-level clap structures. Per-command arguments live next to each
//! command's implementation.

use clap::{Parser, Subcommand};

use crate::cli::commands::history::HistoryArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::verify::VerifyArgs;

#[derive(Parser, Debug)]
#[command(name = "verity")]
#[command(about = "Verity - free-text verification client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Verity configuration in the current directory
    Init(InitArgs),

    /// Verify a piece of text
    Verify(VerifyArgs),

    /// Browse, replay and clear verification history
    History(HistoryArgs),

    /// List the models offered by the verification service
    Models,

    /// Interactive session: verify lines from stdin with live notifications
    Session,
}
