//! lazyflag - Inspect the lazyflag binding engine from the command line

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Tokenize { args } => commands::tokenize::run(&cli, args),
        Command::Translate { idents, upper } => commands::translate::run(&cli, idents, *upper),
        Command::Resolve {
            paths,
            aliases,
            alias_file,
        } => commands::resolve::run(&cli, paths, aliases, alias_file.as_deref()),
    }
}
