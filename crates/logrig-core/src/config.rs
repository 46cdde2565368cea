//! Loading logging configuration from YAML.
//!
//! The file holds one flat mapping. Scalars are read as strings, so
//! `reopen_interval: 60` and `reopen_interval: "60"` mean the same thing, and
//! a bare key (`color:`) is present with an empty value.
//!
//! ```yaml
//! type: file
//! file_name: /var/log/app.log
//! reopen_interval: 60
//! level: info
//! ```

use logrig_types::{bail, LogError, LoggingConfig, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Read a configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<LoggingConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        LogError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    parse_config(&content)
}

/// Parse configuration from YAML text. An empty document is an empty configuration.
pub fn parse_config(content: &str) -> Result<LoggingConfig> {
    let value: Value = serde_yaml::from_str(content)?;

    let mapping = match value {
        Value::Null => return Ok(LoggingConfig::new()),
        Value::Mapping(mapping) => mapping,
        _ => bail!("logging configuration must be a mapping"),
    };

    let mut config = LoggingConfig::new();
    for (key, value) in mapping {
        let key = scalar_to_string(key)
            .ok_or_else(|| LogError::Config("configuration keys must be scalars".to_string()))?;
        match scalar_to_string(value) {
            Some(value) => {
                config.set(key, value);
            }
            None => bail!("nested value under '{}'; configuration must be flat", key),
        }
    }
    Ok(config)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
