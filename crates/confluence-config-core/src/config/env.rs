//! Ambient key/value environment
//!
//! The resolver never reads process-global state. Callers build an
//! [`AmbientEnvironment`] explicitly (from literals in tests, or from a
//! snapshot of the real process environment via
//! [`AmbientEnvironment::from_process_env`]) and pass it in.

use std::collections::BTreeMap;

/// Every environment key the resolver consults, grouped by field in
/// priority order.
pub const RECOGNIZED_KEYS: [&str; 8] = [
    "CONFLUENCE_DOMAIN",
    "CONFLUENCE_HOST",
    "CONFLUENCE_EMAIL",
    "CONFLUENCE_USERNAME",
    "CONFLUENCE_API_TOKEN",
    "CONFLUENCE_PASSWORD",
    "CONFLUENCE_AUTH_TYPE",
    "CONFLUENCE_API_PATH",
];

/// Immutable mapping from key names to string values.
///
/// A key that is missing from the map and a key whose value is empty (or
/// only whitespace) are equivalent for resolution purposes: both are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientEnvironment {
    vars: BTreeMap<String, String>,
}

impl AmbientEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the recognized `CONFLUENCE_*` keys from the process environment.
    ///
    /// Keys that are unset or hold non-Unicode data are skipped.
    pub fn from_process_env() -> Self {
        RECOGNIZED_KEYS
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (*key, value)))
            .collect()
    }

    /// Return a copy of this environment with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Raw value for `key`, exactly as supplied.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Trimmed value for `key`, or `None` if absent, empty, or whitespace-only.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether `key` holds a usable (non-blank) value.
    pub fn is_set(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Number of entries, blank ones included.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the environment has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AmbientEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
