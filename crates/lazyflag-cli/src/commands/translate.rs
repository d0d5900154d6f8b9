//! Translate command - field identifier to lookup key

use anyhow::Result;
use lazyflag::{camel_to_snake, upper_snake};

use super::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, idents: &[String], upper: bool) -> Result<()> {
    let translate: fn(&str) -> String = if upper { upper_snake } else { camel_to_snake };
    let pairs: Vec<(&str, String)> = idents
        .iter()
        .map(|ident| (ident.as_str(), translate(ident)))
        .collect();

    match cli.format {
        OutputFormat::Human => {
            for (ident, key) in &pairs {
                println!("{} -> {}", ident, key);
            }
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = pairs
                .into_iter()
                .map(|(ident, key)| (ident.to_string(), serde_json::Value::String(key)))
                .collect();
            print_json(cli, &map)?;
        }
    }

    Ok(())
}
