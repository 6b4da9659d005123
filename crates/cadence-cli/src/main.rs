//! Cadence CLI - Replay frame traces through the Cadence runtime

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{keys, replay};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Frame clock and input state inspector", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded frame trace and print per-frame state
    Replay {
        /// Path to trace file (TOML)
        trace: String,

        /// Path to runtime config file
        #[arg(long)]
        config: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List canonical key identifiers and their table indices
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Replay {
            trace,
            config,
            format,
        } => replay::run(replay::ReplayArgs {
            trace,
            config,
            format,
        }),
        Commands::Keys => keys::run(),
    }
}
