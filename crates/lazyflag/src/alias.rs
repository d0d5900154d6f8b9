//! Alias table: field path to override lookup key

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from a field path (dotted for nested records) to the key that
/// should be looked up instead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(HashMap<String, String>);

impl Alias {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override for `path`
    pub fn with(mut self, path: impl Into<String>, key: impl Into<String>) -> Self {
        self.0.insert(path.into(), key.into());
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lookup key for `path`: the override when one exists, otherwise the
    /// last dotted segment of `path`
    pub fn resolve<'a>(&'a self, path: &'a str) -> &'a str {
        match self.get(path) {
            Some(key) => key,
            None => last_segment(path),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Alias
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Alias
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Alias {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Resolve `path` against an optional alias table
pub fn resolve_alias<'a>(alias: Option<&'a Alias>, path: &'a str) -> &'a str {
    match alias {
        Some(alias) => alias.resolve(path),
        None => last_segment(path),
    }
}

fn last_segment(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_alias_takes_last_segment() {
        assert_eq!(resolve_alias(None, "info.iname"), "iname");
        assert_eq!(resolve_alias(None, "a.b.c"), "c");
        assert_eq!(resolve_alias(None, "name"), "name");
        assert_eq!(resolve_alias(None, "trailing."), "");

        let empty = Alias::new();
        assert_eq!(empty.resolve("info.iname"), "iname");
    }

    #[test]
    fn test_override_is_verbatim() {
        let alias = Alias::from([("info.iname", "ename"), ("age", "vage")]);
        assert_eq!(alias.resolve("info.iname"), "ename");
        assert_eq!(alias.resolve("age"), "vage");
        assert_eq!(alias.resolve("other.iname"), "iname");
    }

    #[test]
    fn test_deserialize_from_json() {
        let alias: Alias = serde_json::from_str(r#"{"db.url":"DATABASE_URL"}"#).unwrap();
        assert_eq!(alias.len(), 1);
        assert_eq!(alias.resolve("db.url"), "DATABASE_URL");
    }
}
