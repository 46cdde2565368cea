//! Standard output sink.

use crate::labels::{format_line, Cutoff, LabelStyle};
use logrig_types::{LoggingConfig, Result, Severity, Sink};
use std::io::{self, Write};

/// Writes lines to standard output.
///
/// Each raw write takes the stdout lock once, writes the whole message, and
/// flushes, so concurrent callers interleave whole messages but never split one.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    style: LabelStyle,
    cutoff: Cutoff,
}

impl ConsoleSink {
    /// Type tag in the factory.
    pub const KIND: &'static str = "std_out";

    /// Create a sink with explicit settings.
    pub fn new(style: LabelStyle, cutoff: Cutoff) -> Self {
        Self { style, cutoff }
    }

    /// Colored when `color` is present; cutoff from `level`.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        Ok(Self::new(LabelStyle::from_config(config), Cutoff::from_config(config)?))
    }

    /// Label table in use.
    pub fn style(&self) -> LabelStyle {
        self.style
    }

    /// Filter in use.
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn log_raw(&self, message: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(message.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render(&self, message: &str, level: Severity) -> Option<String> {
        self.cutoff
            .allows(level)
            .then(|| format_line(self.style, message, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_key_selects_colored_labels() {
        let sink = ConsoleSink::from_config(&LoggingConfig::new().with("color", "")).unwrap();
        assert_eq!(sink.style(), LabelStyle::Colored);
        let line = sink.render("boom", Severity::Error).unwrap();
        assert!(line.ends_with(" \x1b[31;1m[ERROR]\x1b[0m boom"));
    }

    #[test]
    fn test_no_color_key_selects_plain_labels() {
        let sink = ConsoleSink::from_config(&LoggingConfig::new()).unwrap();
        assert_eq!(sink.style(), LabelStyle::Plain);
        let line = sink.render("boom", Severity::Error).unwrap();
        assert!(line.ends_with(" [ERROR] boom"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_color_never_affects_filtering() {
        let colored = ConsoleSink::new(LabelStyle::Colored, Cutoff::At(Severity::Warn));
        let plain = ConsoleSink::new(LabelStyle::Plain, Cutoff::At(Severity::Warn));
        for level in Severity::ALL {
            assert_eq!(
                colored.render("m", level).is_some(),
                plain.render("m", level).is_some()
            );
        }
        assert!(plain.render("m", Severity::Info).is_none());
        assert!(plain.log("m", Severity::Info).is_ok());
    }

    #[test]
    fn test_bad_level_is_config_error() {
        let config = LoggingConfig::new().with("level", "chatty");
        let err = ConsoleSink::from_config(&config).unwrap_err();
        assert!(err.is_config());
    }
}
