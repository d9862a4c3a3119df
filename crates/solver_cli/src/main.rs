//! Rootscan CLI - interval scanning and Newton-Raphson root location
//!
//! Operational entry point for the solver_core root finder.
//!
//! # Commands
//!
//! - `rootscan scan` - Scan an interval for sign-change brackets and
//!   refine each one to a root
//!
//! Interval bounds and tolerances omitted on the command line are prompted
//! for interactively on stdin.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Rootscan root-finding CLI
#[derive(Parser)]
#[command(name = "rootscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an interval and report every root found
    Scan(commands::scan::ScanArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Scan(args) => commands::scan::run(&args),
    }
}
