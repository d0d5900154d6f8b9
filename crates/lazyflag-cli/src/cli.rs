//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect how lazyflag tokenizes arguments and resolves lookup keys
#[derive(Parser, Debug)]
#[command(name = "lazyflag")]
#[command(version)]
#[command(about = "Inspect how lazyflag tokenizes arguments and resolves lookup keys")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human", env = "LAZYFLAG_FORMAT")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Human,
    /// A single JSON document
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize an argument list into long and short tables
    ///
    /// Example: lazyflag tokenize -- --name jesko -v --peer a b
    Tokenize {
        /// Arguments to tokenize (after `--`)
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Translate field identifiers into lookup keys
    Translate {
        /// Identifiers such as IpAddress or user_id
        #[arg(required = true)]
        idents: Vec<String>,

        /// Uppercase the result (environment-style keys)
        #[arg(long)]
        upper: bool,
    },

    /// Resolve field paths against an alias table
    Resolve {
        /// Field paths such as info.iname
        #[arg(required = true)]
        paths: Vec<String>,

        /// Alias override, PATH=KEY (repeatable)
        #[arg(long = "alias", short = 'a', value_parser = parse_alias_pair)]
        aliases: Vec<(String, String)>,

        /// JSON file holding an alias table object
        #[arg(long, env = "LAZYFLAG_ALIAS_FILE")]
        alias_file: Option<PathBuf>,
    },
}

fn parse_alias_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((path, key)) if !path.is_empty() => Ok((path.to_string(), key.to_string())),
        _ => Err(format!("expected PATH=KEY, got `{}`", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alias_pair() {
        assert_eq!(
            parse_alias_pair("info.iname=ename").unwrap(),
            ("info.iname".to_string(), "ename".to_string())
        );
        assert!(parse_alias_pair("noequals").is_err());
        assert!(parse_alias_pair("=key").is_err());
    }

    #[test]
    fn test_tokenize_takes_trailing_args() {
        let cli = Cli::try_parse_from(["lazyflag", "tokenize", "--", "--name", "jesko", "-v"]).unwrap();
        match cli.command {
            Command::Tokenize { args } => assert_eq!(args, ["--name", "jesko", "-v"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_resolve_collects_aliases() {
        let cli = Cli::try_parse_from([
            "lazyflag", "resolve", "-a", "age=vage", "--alias", "info.iname=ename", "age",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve { aliases, paths, .. } => {
                assert_eq!(aliases.len(), 2);
                assert_eq!(paths, ["age"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
