//! Upkeep CLI Application
//!
//! Command-line interface and MCP server for plan pricing and booking
//! requests.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, UpkeepMcpServer};
use renderer::TerminalRenderer;
use upkeep_core::{params::ListPlans, DeskBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = DeskBuilder::new().with_catalog_path(catalog_file);
    if let Some(Contact(args)) = &command {
        builder = builder.with_contact_delay(Duration::from_millis(args.delay_ms));
    }

    let desk = builder.build().await.context("Failed to load plan catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Upkeep started");

    match command {
        Some(Plans { command }) => Cli::new(desk, renderer).handle_plan_command(command),
        Some(Services) => Cli::new(desk, renderer).list_services(),
        Some(Quote(args)) => Cli::new(desk, renderer).quote(args),
        Some(Book(args)) => Cli::new(desk, renderer).book(args),
        Some(Contact(args)) => Cli::new(desk, renderer).contact(args).await,
        Some(Serve) => {
            info!("Starting Upkeep MCP server");
            run_stdio_server(UpkeepMcpServer::new(desk))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(desk, renderer).list_plans(&ListPlans::default()),
    }
}
