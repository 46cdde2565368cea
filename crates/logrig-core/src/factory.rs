//! Sink factory.
//!
//! Maps a type string to a constructor. The built-in kinds are seeded by
//! [`SinkFactory::new`]; anything else can be added with
//! [`SinkFactory::register`] without touching the existing sinks.
//!
//! ## Example
//!
//! ```
//! use logrig_core::factory::SinkFactory;
//! use logrig_core::NullSink;
//! use logrig_types::LoggingConfig;
//!
//! let mut factory = SinkFactory::new();
//! factory.register("quiet", |_config| Ok(Box::new(NullSink)));
//!
//! let sink = factory.produce(&LoggingConfig::new().with("type", "quiet")).unwrap();
//! assert_eq!(sink.kind(), "");
//! assert!(factory.produce(&LoggingConfig::new().with("type", "syslog")).is_err());
//! ```

use crate::sink::{ConsoleSink, FileSink, NullSink};
use logrig_types::config::keys;
use logrig_types::{LogError, LoggingConfig, Result, Sink};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Builds a sink from the full configuration.
pub type SinkCreator = Box<dyn Fn(&LoggingConfig) -> Result<Box<dyn Sink>> + Send + Sync>;

/// Registry of sink constructors keyed by type string.
pub struct SinkFactory {
    creators: HashMap<String, SinkCreator>,
}

impl SinkFactory {
    /// Factory with the built-in kinds: `""`, `"std_out"` and `"file"`.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory
            .register(NullSink::KIND, |config| Ok(Box::new(NullSink::from_config(config)?)))
            .register(ConsoleSink::KIND, |config| {
                Ok(Box::new(ConsoleSink::from_config(config)?))
            })
            .register(FileSink::KIND, |config| Ok(Box::new(FileSink::from_config(config)?)));
        factory
    }

    /// Factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            creators: HashMap::new(),
        }
    }

    /// Register (or replace) the constructor for `kind`.
    pub fn register<F>(&mut self, kind: impl Into<String>, creator: F) -> &mut Self
    where
        F: Fn(&LoggingConfig) -> Result<Box<dyn Sink>> + Send + Sync + 'static,
    {
        self.creators.insert(kind.into(), Box::new(creator));
        self
    }

    /// Whether a constructor exists for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.creators.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Build the sink selected by the `type` key.
    ///
    /// # Errors
    ///
    /// [`LogError::MissingType`] without a `type` key, [`LogError::UnknownType`]
    /// when nothing is registered for it, or whatever the constructor reports.
    pub fn produce(&self, config: &LoggingConfig) -> Result<Box<dyn Sink>> {
        let kind = config.get(keys::TYPE).ok_or(LogError::MissingType)?;
        let creator = self
            .creators
            .get(kind)
            .ok_or_else(|| LogError::UnknownType(kind.to_string()))?;

        debug!(kind, "Producing log sink");
        creator(config)
    }
}

impl Default for SinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SinkFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkFactory").field("kinds", &self.kinds()).finish()
    }
}

/// Process-wide factory with the built-in kinds. Immutable once built.
pub fn default_factory() -> &'static SinkFactory {
    static FACTORY: Lazy<SinkFactory> = Lazy::new(SinkFactory::new);
    &FACTORY
}
