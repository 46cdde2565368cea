//! Common enumerations used throughout logrig.

use crate::errors::{LogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Ordered from least to most severe, so filtering is a plain comparison:
/// a message passes a cutoff when `level >= cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Detailed trace messages
    Trace,
    /// Debug messages
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// The least severe level; streaming statements start here.
    pub const fn lowest() -> Self {
        Severity::Trace
    }

    /// Upper-case name, e.g. `"WARN"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::lowest()
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(LogError::invalid_value(
                "level",
                s,
                "expected one of trace, debug, info, warn, error",
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);

        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
        assert_eq!(Severity::default(), Severity::Trace);
    }

    #[test]
    fn test_parse() {
        assert_eq!("trace".parse::<Severity>().unwrap(), Severity::Trace);
        assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" error ".parse::<Severity>().unwrap(), Severity::Error);

        let err = "loud".parse::<Severity>().unwrap_err();
        assert!(err.is_config());
        match err {
            crate::LogError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "level");
                assert_eq!(value, "loud");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for level in Severity::ALL {
            assert_eq!(level.to_string().parse::<Severity>().unwrap(), level);
        }
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&Severity::Warn).unwrap();
        assert_eq!(yaml.trim(), "WARN");
        let level: Severity = serde_yaml::from_str("DEBUG").unwrap();
        assert_eq!(level, Severity::Debug);
    }
}
