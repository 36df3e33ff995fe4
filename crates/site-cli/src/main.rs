//! Static site maintenance CLI
//!
//! Rebuilds the derived artifacts of a blog checkout: image listings,
//! the post index, the embedded archive block and the sitemap.

mod cli;
mod commands;
mod config;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(&cli.root, cmd),
        None => {
            println!("{} Static site maintenance toolkit", "site".green().bold());
            println!();
            println!("Run {} for available commands.", "site --help".cyan());
            Ok(())
        }
    }
}

/// RUST_LOG wins when set; otherwise --verbose raises the default level
/// from info to debug.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let fmt_layer = fmt::layer().with_target(true).compact();
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

fn execute_command(root: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Images => commands::run_images(root),
        Commands::Index => commands::run_index(root),
        Commands::Archive { dry_run, json } => commands::run_archive(root, dry_run, json),
        Commands::Sitemap { dry_run } => commands::run_sitemap(root, dry_run),
        Commands::Refresh => commands::run_refresh(root),
    }
}
