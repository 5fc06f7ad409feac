//! Command-line front end for the draughts engine
//!
//! Reads a board snapshot, asks the engine for the side to move and prints
//! the chosen move (or the whole winning ply with `--ply`).

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let output = cli::run(&args)?;
    println!("{}", output);

    Ok(())
}
