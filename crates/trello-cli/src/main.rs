//! trello-cli application
//!
//! Command-line interface for a handful of Trello board, list, card and label
//! operations.

mod args;
mod cli;
mod renderer;

use std::io::{stdout, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trello_core::TrelloBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        api_url,
        no_color,
        json,
        command,
    } = Args::parse();

    let trello = TrelloBuilder::new()
        .with_config_path(config_file)
        .with_base_url(api_url)
        .build()
        .context("Failed to initialize Trello client")?;

    let renderer = TerminalRenderer::new(!no_color && stdout().is_terminal());
    let cli = Cli::new(trello, renderer, json);

    info!("trello-cli started");

    match command {
        List { command } => cli.handle_list_command(command),
        Create { command } => cli.handle_create_command(command),
        Delete { command } => cli.handle_delete_command(command),
        Move { command } => cli.handle_move_command(command),
    }
}
