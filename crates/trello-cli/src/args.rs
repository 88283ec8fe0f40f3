use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CreateCommands, DeleteCommands, ListCommands, MoveCommands};

/// Very simple Trello API client
///
/// Lists boards, lists, cards and labels and creates, deletes or moves cards.
/// Credentials are read from a JSON file holding an API key and an
/// application token; it is created with placeholder values on first run.
#[derive(Parser)]
#[command(version, about, name = "trello-cli")]
pub struct Args {
    /// Path to the credentials file. Defaults to
    /// $XDG_CONFIG_HOME/trello-cli/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Root URL of the REST API
    #[arg(long, global = true, hide = true, env = "TRELLO_API_URL")]
    pub api_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print entities as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the trello-cli tool
#[derive(Subcommand)]
pub enum Commands {
    /// List boards, lists, cards or labels
    #[command(alias = "ls")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Create a card
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },
    /// Delete a card
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        command: DeleteCommands,
    },
    /// Move a card to a list or position
    #[command(alias = "mv")]
    Move {
        #[command(subcommand)]
        command: MoveCommands,
    },
}
