//! Tangelo CLI - The console shop.
//!
//! # Usage
//!
//! ```bash
//! # Run the interactive shop (the default)
//! tangelo
//! tangelo shop
//!
//! # Seed the catalogue with sample products
//! tangelo seed
//! ```
//!
//! # Commands
//!
//! - `shop` - Interactive menu: register, log in, browse, manage a cart,
//!   check out, review order history, track shipments
//! - `seed` - Populate the product store with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]
// Interactive console app: stdout is the UI.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tangelo")]
#[command(author, version, about = "Tangelo console shop")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shop (default)
    Shop,
    /// Seed the catalogue with sample products
    Seed,
}

fn main() {
    // Keep library logs out of the menus unless explicitly requested.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Shop) {
        Commands::Shop => commands::shop::run()?,
        Commands::Seed => commands::seed::run()?,
    }
    Ok(())
}
