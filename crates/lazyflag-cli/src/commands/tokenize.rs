//! Tokenize command - show the long and short tables

use anyhow::{Context, Result};
use lazyflag::{Loader, TokenTable};
use std::collections::BTreeMap;
use tracing::debug;

use super::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, args: &[String]) -> Result<()> {
    debug!(count = args.len(), "tokenizing arguments");
    let loader = Loader::from_args(args).context("Failed to tokenize arguments")?;

    match cli.format {
        OutputFormat::Human => {
            print_table("long", "--", &sorted(loader.long()));
            print_table("short", "-", &sorted(loader.short()));
        }
        OutputFormat::Json => {
            // serde_json objects keep keys sorted
            let tables = serde_json::to_value(&loader).context("Failed to serialize tables")?;
            print_json(cli, &tables)?;
        }
    }

    Ok(())
}

fn sorted(table: &TokenTable) -> BTreeMap<&str, &[String]> {
    table
        .iter()
        .map(|(key, values)| (key.as_str(), values.as_slice()))
        .collect()
}

fn print_table(title: &str, prefix: &str, table: &BTreeMap<&str, &[String]>) {
    println!("{} ({})", title, table.len());
    for (key, values) in table {
        if values.is_empty() {
            println!("  {}{}", prefix, key);
        } else {
            println!("  {}{} = {}", prefix, key, values.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use lazyflag::Loader;

    #[test]
    fn test_loader_serializes_both_tables() {
        let loader = Loader::from_args(["--name", "jesko", "-v", "--peer", "a", "b"]).unwrap();
        let tables = serde_json::to_value(&loader).unwrap();
        assert_eq!(
            tables,
            serde_json::json!({
                "long": {"name": ["jesko"], "peer": ["a", "b"]},
                "short": {"v": []},
            })
        );
    }
}
