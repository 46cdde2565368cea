//! Logging configuration.
//!
//! A configuration is a flat mapping of string keys to string values. The
//! factory reads `type`; each sink reads the keys it cares about and ignores
//! the rest. An absent key means "use the default" unless the sink requires it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known configuration keys.
pub mod keys {
    /// Sink selector: `""`, `"std_out"` or `"file"`.
    pub const TYPE: &str = "type";
    /// Presence (any value, even empty) enables ANSI colored labels on the console.
    pub const COLOR: &str = "color";
    /// Target path of the file sink.
    pub const FILE_NAME: &str = "file_name";
    /// Seconds between reopens of the file sink.
    pub const REOPEN_INTERVAL: &str = "reopen_interval";
    /// Cutoff severity (`trace`..`error`, or `off`).
    pub const LEVEL: &str = "level";
}

/// Flat key/value configuration a sink is produced from.
///
/// # Example
///
/// ```
/// use logrig_types::LoggingConfig;
///
/// let config: LoggingConfig = [("type", "std_out"), ("color", "")].into_iter().collect();
/// assert!(config.contains("color"));
/// assert_eq!(config, LoggingConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoggingConfig(BTreeMap<String, String>);

impl LoggingConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a key is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the configuration has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(mut self, other: LoggingConfig) -> Self {
        self.0.extend(other.0);
        self
    }
}

/// Colored console output, used when nothing else is configured.
impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new().with(keys::TYPE, "std_out").with(keys::COLOR, "")
    }
}

impl<K, V> FromIterator<(K, V)> for LoggingConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_colored_console() {
        let config = LoggingConfig::default();
        assert_eq!(config.get(keys::TYPE), Some("std_out"));
        assert_eq!(config.get(keys::COLOR), Some(""));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_presence_vs_value() {
        let config = LoggingConfig::new().with("color", "");
        assert!(config.contains("color"));
        assert_eq!(config.get("color"), Some(""));
        assert!(!config.contains("file_name"));
        assert_eq!(config.get("file_name"), None);
    }

    #[test]
    fn test_set_remove_merge() {
        let mut config = LoggingConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.set("type", "file"), None);
        assert_eq!(config.set("type", "std_out"), Some("file".to_string()));
        assert_eq!(config.remove("type"), Some("std_out".to_string()));
        assert!(config.is_empty());

        let base = LoggingConfig::new().with("type", "file").with("file_name", "a.log");
        let merged = base.merge(LoggingConfig::new().with("file_name", "b.log"));
        assert_eq!(merged.get("type"), Some("file"));
        assert_eq!(merged.get("file_name"), Some("b.log"));
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let config: LoggingConfig = [("z", "1"), ("a", "2")].into_iter().collect();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "z"]);
    }
}
