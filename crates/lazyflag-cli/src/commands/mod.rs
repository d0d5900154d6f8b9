//! CLI command implementations

pub mod resolve;
pub mod tokenize;
pub mod translate;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::Cli;

/// Print any serializable value as JSON honoring `--pretty`
pub fn print_json<T: Serialize + ?Sized>(cli: &Cli, value: &T) -> Result<()> {
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", rendered.context("Failed to serialize output")?);
    Ok(())
}
