//! Sink that discards everything.

use logrig_types::{LoggingConfig, Result, Sink};

/// Sink registered under the empty type string.
///
/// Every call succeeds and nothing is written, which makes it a cheap
/// stand-in when logging is configured away.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Type tag in the factory.
    pub const KIND: &'static str = "";

    /// Build from configuration. Every key is ignored.
    pub fn from_config(_config: &LoggingConfig) -> Result<Self> {
        Ok(NullSink)
    }
}

impl Sink for NullSink {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn log_raw(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}
