//! Level labels, the cutoff filter, and line formatting shared by all sinks.

use crate::time::timestamp;
use logrig_types::config::keys;
use logrig_types::{LogError, LoggingConfig, Result, Severity};
use std::fmt;
use std::str::FromStr;

/// Which label table a sink decorates lines with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Bracketed names, e.g. `" [WARN] "`
    #[default]
    Plain,
    /// Bracketed names wrapped in bold ANSI colors
    Colored,
}

impl LabelStyle {
    /// Colored when the configuration carries a `color` key, whatever its value.
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.contains(keys::COLOR) {
            LabelStyle::Colored
        } else {
            LabelStyle::Plain
        }
    }

    /// Label placed between the timestamp and the message.
    pub const fn label(self, level: Severity) -> &'static str {
        match self {
            LabelStyle::Plain => match level {
                Severity::Error => " [ERROR] ",
                Severity::Warn => " [WARN] ",
                Severity::Info => " [INFO] ",
                Severity::Debug => " [DEBUG] ",
                Severity::Trace => " [TRACE] ",
            },
            LabelStyle::Colored => match level {
                Severity::Error => " \x1b[31;1m[ERROR]\x1b[0m ",
                Severity::Warn => " \x1b[33;1m[WARN]\x1b[0m ",
                Severity::Info => " \x1b[32;1m[INFO]\x1b[0m ",
                Severity::Debug => " \x1b[34;1m[DEBUG]\x1b[0m ",
                Severity::Trace => " \x1b[37;1m[TRACE]\x1b[0m ",
            },
        }
    }
}

/// Lowest severity a sink lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// Pass `level` and everything above it
    At(Severity),
    /// Pass nothing
    Off,
}

impl Cutoff {
    /// Reads the optional `level` key; everything passes when it is absent.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        match config.get(keys::LEVEL) {
            Some(value) => value.parse(),
            None => Ok(Cutoff::default()),
        }
    }

    /// Whether a message at `level` should be written.
    pub fn allows(self, level: Severity) -> bool {
        match self {
            Cutoff::At(min) => level >= min,
            Cutoff::Off => false,
        }
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Cutoff::At(Severity::lowest())
    }
}

impl FromStr for Cutoff {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        if matches!(s.trim().to_ascii_lowercase().as_str(), "off" | "none") {
            return Ok(Cutoff::Off);
        }
        s.parse::<Severity>().map(Cutoff::At).map_err(|_| {
            LogError::invalid_value(
                keys::LEVEL,
                s,
                "expected one of trace, debug, info, warn, error, off",
            )
        })
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cutoff::At(level) => write!(f, "{level}"),
            Cutoff::Off => f.write_str("OFF"),
        }
    }
}

/// `timestamp + label + message`. No newline is added.
pub fn format_line(style: LabelStyle, message: &str, level: Severity) -> String {
    let label = style.label(level);
    let mut line =
        String::with_capacity(crate::time::TIMESTAMP_WIDTH + label.len() + message.len());
    line.push_str(&timestamp());
    line.push_str(label);
    line.push_str(message);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_both_labels() {
        for level in Severity::ALL {
            let plain = LabelStyle::Plain.label(level);
            let colored = LabelStyle::Colored.label(level);
            let name = format!("[{level}]");

            assert_eq!(plain, format!(" {name} "));
            assert!(colored.contains(&name));
            assert!(colored.starts_with(" \x1b["));
            assert!(colored.ends_with("\x1b[0m "));
        }
    }

    #[test]
    fn test_style_from_config_uses_presence() {
        let colored = LoggingConfig::new().with("color", "");
        let plain = LoggingConfig::new().with("type", "std_out");
        assert_eq!(LabelStyle::from_config(&colored), LabelStyle::Colored);
        assert_eq!(LabelStyle::from_config(&plain), LabelStyle::Plain);
    }

    #[test]
    fn test_cutoff_filtering() {
        let warn = Cutoff::At(Severity::Warn);
        assert!(!warn.allows(Severity::Info));
        assert!(warn.allows(Severity::Warn));
        assert!(warn.allows(Severity::Error));

        for level in Severity::ALL {
            assert!(Cutoff::default().allows(level));
            assert!(!Cutoff::Off.allows(level));
        }
    }

    #[test]
    fn test_cutoff_from_config() {
        let config = LoggingConfig::new().with("level", "info");
        assert_eq!(Cutoff::from_config(&config).unwrap(), Cutoff::At(Severity::Info));

        let config = LoggingConfig::new().with("level", "OFF");
        assert_eq!(Cutoff::from_config(&config).unwrap(), Cutoff::Off);

        assert_eq!(Cutoff::from_config(&LoggingConfig::new()).unwrap(), Cutoff::default());

        let config = LoggingConfig::new().with("level", "verbose");
        assert!(Cutoff::from_config(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_format_line_layout() {
        let line = format_line(LabelStyle::Plain, "hello", Severity::Info);
        assert_eq!(line.len(), crate::time::TIMESTAMP_WIDTH + " [INFO] hello".len());
        assert!(line.ends_with(" [INFO] hello"));
        assert!(!line.ends_with('\n'));
    }
}
