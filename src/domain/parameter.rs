//! Parameter domain types
//!
//! A parameter is addressed remotely by a slash-delimited name such as
//! `/app/prod/DB_HOST`; locally only its last segment (`DB_HOST`) is kept.

use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// A single parameter as returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Full remote name, e.g. `/app/prod/DB_HOST`
    pub name: String,
    /// Parameter value (decrypted for SecureString parameters)
    pub value: String,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Short key: the last `/`-separated segment of the name
    pub fn key(&self) -> &str {
        short_name(&self.name)
    }
}

/// Last `/`-separated segment of a parameter name
///
/// A name ending in `/` yields an empty key.
pub fn short_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Join a path prefix and a key with exactly one `/` between them
pub fn join_key(path: &str, key: &str) -> String {
    format!(
        "{}/{}",
        path.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

/// Flat mapping of short key to value
///
/// Keys from different paths that share a trailing segment collide; the
/// value inserted last wins. Iteration is in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter under its short key
    ///
    /// Returns the value it replaced, if any.
    pub fn insert(&mut self, parameter: Parameter) -> Option<String> {
        let key = parameter.key().to_string();
        self.entries.insert(key, parameter.value)
    }

    /// Look up a value by short key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = Self::new();
        for parameter in iter {
            set.insert(parameter);
        }
        set
    }
}

/// Iterator over `(key, value)` pairs of a [`ParameterSet`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("/app/prod/DB_HOST"), "DB_HOST");
        assert_eq!(short_name("DB_HOST"), "DB_HOST");
        assert_eq!(short_name("/app/prod/"), "");
    }

    #[test]
    fn test_join_key() {
        assert_eq!(join_key("/app/prod", "DB_HOST"), "/app/prod/DB_HOST");
        assert_eq!(join_key("/app/prod/", "DB_HOST"), "/app/prod/DB_HOST");
        assert_eq!(join_key("/app/prod/", "/DB_HOST"), "/app/prod/DB_HOST");
    }

    #[test]
    fn test_insert_keys_by_last_segment() {
        let mut set = ParameterSet::new();
        set.insert(Parameter::new("/app/prod/DB_HOST", "db.internal"));
        assert_eq!(set.get("DB_HOST"), Some("db.internal"));
        assert_eq!(set.get("/app/prod/DB_HOST"), None);
    }

    #[test]
    fn test_shadowing_last_write_wins() {
        let mut set = ParameterSet::new();
        assert_eq!(set.insert(Parameter::new("/shared/PORT", "80")), None);
        let replaced = set.insert(Parameter::new("/app/prod/PORT", "8080"));

        assert_eq!(replaced.as_deref(), Some("80"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("PORT"), Some("8080"));
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let set: ParameterSet = vec![
            Parameter::new("/p/zeta", "3"),
            Parameter::new("/p/alpha", "1"),
            Parameter::new("/p/mid", "2"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let set: ParameterSet = vec![Parameter::new("/p/a", "1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"a":"1"}"#);
    }
}
