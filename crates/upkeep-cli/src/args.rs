use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BookArgs, ContactArgs, PlanCommands, QuoteArgs};

/// Pricing and booking requests for property-maintenance plans
///
/// Upkeep shows the plan catalog, quotes a plan's price for a property's
/// square footage, and walks a booking request through the four-step wizard.
/// It can also run as an MCP (Model Context Protocol) server so AI assistants
/// can drive a booking session.
#[derive(Parser)]
#[command(version, about, name = "upkeep")]
pub struct Args {
    /// Path to a JSON plan catalog. Defaults to
    /// $XDG_CONFIG_HOME/upkeep/catalog.json when present, otherwise the
    /// built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Upkeep CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the plan catalog
    #[command(alias = "p")]
    Plans {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// List individual services and their starting prices
    #[command(alias = "sv")]
    Services,
    /// Quote a plan's price for a property size
    #[command(alias = "q")]
    Quote(QuoteArgs),
    /// Walk a booking request through every wizard step and submit it
    #[command(alias = "b")]
    Book(BookArgs),
    /// Send a message through the contact form
    Contact(ContactArgs),
    /// Start the MCP server
    Serve,
}
