//! Resolve command - field path to lookup key through an alias table

use anyhow::{Context, Result};
use lazyflag::Alias;
use std::path::Path;

use super::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(
    cli: &Cli,
    paths: &[String],
    aliases: &[(String, String)],
    alias_file: Option<&Path>,
) -> Result<()> {
    let alias = load_alias(aliases, alias_file)?;

    match cli.format {
        OutputFormat::Human => {
            for path in paths {
                let key = alias.resolve(path);
                let marker = if alias.get(path).is_some() { " (alias)" } else { "" };
                println!("{} -> {}{}", path, key, marker);
            }
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = paths
                .iter()
                .map(|path| (path.clone(), alias.resolve(path).into()))
                .collect();
            print_json(cli, &map)?;
        }
    }

    Ok(())
}

/// File entries first, command-line pairs override them
fn load_alias(aliases: &[(String, String)], alias_file: Option<&Path>) -> Result<Alias> {
    let mut alias = match alias_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .context(format!("Failed to read alias table from {}", path.display()))?;
            serde_json::from_str::<Alias>(&content).context("Failed to parse alias table")?
        }
        None => Alias::new(),
    };
    for (path, key) in aliases {
        alias = alias.with(path.clone(), key.clone());
    }
    Ok(alias)
}
