//! `slotgrid` CLI — run the allocator demo or drive a grid from a script.
//!
//! ## Usage
//!
//! ```sh
//! # Walk through the built-in scenarios
//! slotgrid demo
//!
//! # Execute a script from a file
//! slotgrid run -i schedule.txt
//!
//! # Execute a script from stdin, one JSON object per result
//! printf 'reserve 2 0 10\nfind 2 15\n' | slotgrid run --json
//!
//! # Show debug logs of every reservation on stderr
//! slotgrid -v run -i schedule.txt
//! ```

mod demo;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "slotgrid",
    version,
    about = "Minute-slot allocator for eight 60-minute periods"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every reservation and search outcome to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration scenarios
    Demo,
    /// Execute a script of grid commands (free, reserve, find, appoint, show)
    Run {
        /// Script file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print one JSON object per result instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo => demo::run()?,
        Commands::Run { input, json } => {
            let source = read_input(input.as_deref())?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            script::run(&source, json, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
