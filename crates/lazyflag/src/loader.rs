//! Argument tokenizer and token-table lookups
//!
//! Grammar: `(--key | -key) [value]*`, repeated. Values attach to the most
//! recently opened key until the next flag token. Values seen before any flag
//! are dropped.

use crate::attr::{LoaderAttr, Translate};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::reflect::TextDecode;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Key to ordered values. An empty list means the flag was seen without values.
pub type TokenTable = HashMap<String, Vec<String>>;

/// Key currently receiving values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open<'a> {
    None,
    Long(&'a str),
    Short(&'a str),
}

/// Tokenized command-line arguments plus the naming rules used when binding
#[derive(Debug, Clone, Default, Serialize)]
pub struct Loader {
    long: TokenTable,
    short: TokenTable,
    #[serde(skip)]
    pub(crate) attr: LoaderAttr,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `args` into a fresh loader
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loader = Self::new();
        loader.parse(args)?;
        Ok(loader)
    }

    pub fn with_attr(mut self, attr: LoaderAttr) -> Self {
        self.attr = attr;
        self
    }

    /// Override the tag name and translator; empty or absent values leave the
    /// current setting in place
    pub fn set_attr(&mut self, tag_name: &str, translate: Option<Translate>) {
        self.attr.set(tag_name, translate);
    }

    pub fn attr(&self) -> &LoaderAttr {
        &self.attr
    }

    /// Tokenize `args` into this loader's tables.
    ///
    /// A long flag repeated while its first occurrence still has no values is
    /// rejected with `Error::Duplicate`. Short flags may repeat freely and
    /// keep accumulating into the same list. On error the tables are left as
    /// they were before the call.
    pub fn parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut long = self.long.clone();
        let mut short = self.short.clone();
        tokenize(args, &mut long, &mut short)?;
        self.long = long;
        self.short = short;
        Ok(())
    }

    /// The `--name` table
    pub fn long(&self) -> &TokenTable {
        &self.long
    }

    /// The `-n` table
    pub fn short(&self) -> &TokenTable {
        &self.short
    }

    /// Values for `key`: the long table first, then the short table, skipping
    /// tables where the key has no values
    pub fn lazy_load(&self, mode: Mode, key: &str) -> &[String] {
        self.lookup(mode, key, key)
    }

    /// Like [`Loader::lazy_load`] with a separate key for the short table
    pub(crate) fn lookup(&self, mode: Mode, long_key: &str, short_key: &str) -> &[String] {
        if mode.contains(Mode::LONG) {
            if let Some(values) = self.long.get(long_key).filter(|v| !v.is_empty()) {
                return values;
            }
        }
        if mode.contains(Mode::SHORT) {
            if let Some(values) = self.short.get(short_key).filter(|v| !v.is_empty()) {
                return values;
            }
        }
        &[]
    }

    /// Whether the flag was given at all, with or without values
    pub fn is_present(&self, mode: Mode, key: &str) -> bool {
        self.presence(mode, key, key)
    }

    pub(crate) fn presence(&self, mode: Mode, long_key: &str, short_key: &str) -> bool {
        (mode.contains(Mode::LONG) && self.long.contains_key(long_key))
            || (mode.contains(Mode::SHORT) && self.short.contains_key(short_key))
    }

    /// Flag presence as a boolean
    pub fn load_as_bool(&self, mode: Mode, key: &str) -> bool {
        self.is_present(mode, key)
    }

    /// The single value attached to `key`.
    ///
    /// No values gives `Ok(None)`, or `Error::NotFound` under
    /// `Mode::REQUIRED`. More than one value is `Error::Duplicate`.
    pub fn load_string(&self, mode: Mode, key: &str) -> Result<Option<&str>> {
        single(self.lazy_load(mode, key), mode)
    }

    /// The single value attached to `key`, parsed as `T`
    pub fn load_parsed<T>(&self, mode: Mode, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        Error: From<T::Err>,
    {
        match self.load_string(mode, key)? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    /// Decode the single value attached to `key` into `target`; absence
    /// leaves `target` untouched unless the mode is required
    pub fn load_text(&self, mode: Mode, key: &str, target: &mut dyn TextDecode) -> Result<()> {
        match self.load_string(mode, key)? {
            Some(raw) => target.decode_text(raw).map_err(Error::Decode),
            None => Ok(()),
        }
    }

    /// Parse every value attached to `key`, in order
    pub fn load_all<T>(&self, mode: Mode, key: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.lazy_load(mode, key);
        if raw.is_empty() && mode.is_required() {
            return Err(Error::NotFound);
        }
        raw.iter()
            .map(|value| value.parse().map_err(Error::decode))
            .collect()
    }
}

/// Tokenizer loop over the given tables; stops at the first error
fn tokenize<I, S>(args: I, long: &mut TokenTable, short: &mut TokenTable) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut open = Open::None;

    for arg in &args {
        let arg = arg.as_ref();
        if let Some(key) = arg.strip_prefix("--") {
            match long.get(key) {
                Some(values) if values.is_empty() => {
                    debug!(key, "long flag repeated before any value");
                    return Err(Error::Duplicate);
                }
                Some(_) => {}
                None => {
                    long.insert(key.to_string(), Vec::new());
                }
            }
            open = Open::Long(key);
        } else if let Some(key) = arg.strip_prefix('-') {
            short.entry(key.to_string()).or_default();
            open = Open::Short(key);
        } else {
            let table = match open {
                Open::Long(key) => long.get_mut(key),
                Open::Short(key) => short.get_mut(key),
                Open::None => None,
            };
            if let Some(values) = table {
                values.push(arg.to_string());
            }
        }
    }
    Ok(())
}

/// Exactly-one-value rule shared by every scalar lookup
pub(crate) fn single(values: &[String], mode: Mode) -> Result<Option<&str>> {
    match values {
        [] if mode.is_required() => Err(Error::NotFound),
        [] => Ok(None),
        [value] => Ok(Some(value.as_str())),
        _ => Err(Error::Duplicate),
    }
}
