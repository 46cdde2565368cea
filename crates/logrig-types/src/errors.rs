//! Error types for logrig operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for logrig operations.
///
/// Configuration problems are reported when a sink is constructed; I/O
/// problems are reported by the call that hit them. Nothing is retried.
#[derive(Error, Debug)]
pub enum LogError {
    /// The configuration has no `type` key
    #[error("Configuration error: logging configuration requires a type of logger")]
    MissingType,

    /// No sink is registered under the requested type
    #[error("Configuration error: no such logger type: '{0}'")]
    UnknownType(String),

    /// A key the sink cannot do without is absent
    #[error("Configuration error: {kind} logger requires '{key}'")]
    MissingKey {
        /// Sink type that asked for the key
        kind: &'static str,
        /// Missing key name
        key: &'static str,
    },

    /// A key is present but its value cannot be used
    #[error("Configuration error: '{value}' is not a valid {key}: {reason}")]
    InvalidValue {
        /// Offending key
        key: String,
        /// Value as written in the configuration
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The log file could not be opened when the sink was built
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The periodic reopen of the log file failed
    #[error("Failed to reopen log file {}: {source}", path.display())]
    Reopen {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O error while writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LogError {
    /// Whether this error comes from a bad or incomplete configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            LogError::MissingType
                | LogError::UnknownType(_)
                | LogError::MissingKey { .. }
                | LogError::InvalidValue { .. }
                | LogError::Config(_)
                | LogError::Yaml(_)
        )
    }

    /// Shorthand for an [`LogError::InvalidValue`].
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        LogError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized Result type for logrig operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Helper macro to bail out with a [`LogError::Config`].
///
/// # Example
///
/// ```ignore
/// if nested {
///     bail!("nested value under '{}'", key);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:expr) => {
        return Err($crate::LogError::Config($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::LogError::Config(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_classification() {
        assert!(LogError::MissingType.is_config());
        assert!(LogError::UnknownType("syslog".into()).is_config());
        assert!(LogError::MissingKey { kind: "file", key: "file_name" }.is_config());
        assert!(LogError::invalid_value("reopen_interval", "abc", "not a number").is_config());

        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(!LogError::Io(io).is_config());
    }

    #[test]
    fn test_messages() {
        let err = LogError::UnknownType("syslog".into());
        assert_eq!(err.to_string(), "Configuration error: no such logger type: 'syslog'");

        let err = LogError::MissingKey { kind: "file", key: "file_name" };
        assert!(err.to_string().contains("file_name"));

        let err = LogError::invalid_value("reopen_interval", "abc", "invalid digit");
        assert!(err.to_string().contains("'abc' is not a valid reopen_interval"));
    }

    fn bails(nested: bool) -> Result<()> {
        if nested {
            bail!("nested value under '{}'", "color");
        }
        Ok(())
    }

    #[test]
    fn test_bail_macro() {
        assert!(bails(false).is_ok());
        let err = bails(true).unwrap_err();
        assert!(matches!(err, LogError::Config(ref m) if m.contains("color")));
    }
}
