//! # logrig Core
//!
//! Sinks, the sink factory, and the logger handle for the logrig logging
//! facility.
//!
//! This crate provides:
//!
//! - **Formatting**: fixed-width UTC timestamps and level label tables
//! - **Sinks**: null, console (optionally colored), and append-mode file with periodic reopen
//! - **Factory**: type-string registry that builds sinks from a [`LoggingConfig`]
//! - **Logger**: owned handle with a scoped, lock-holding line builder
//! - **Global**: lazily created process-wide logger with per-severity entry points
//! - **Config**: flat YAML configuration files
//!
//! ## Example
//!
//! ```no_run
//! use logrig_core::Logger;
//! use logrig_types::{LoggingConfig, Severity};
//!
//! let config = LoggingConfig::new()
//!     .with("type", "file")
//!     .with("file_name", "service.log")
//!     .with("reopen_interval", "60");
//! let logger = Logger::from_config(&config)?;
//!
//! logger.log("listening\n", Severity::Info)?;
//! logger.line(Severity::Debug).push("peers: ").push(3).endl()?;
//! # Ok::<(), logrig_types::LogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod factory;
pub mod global;
pub mod labels;
pub mod logger;
pub mod sink;
pub mod time;

// Re-export commonly used items
pub use config::load_config;
pub use factory::{default_factory, SinkFactory};
pub use global::{
    configure, debug, debug_line, error, error_line, get_logger, info, info_line, install,
    is_configured, line, log, log_raw, trace, trace_line, warn, warn_line,
};
pub use labels::{Cutoff, LabelStyle};
pub use logger::{LineBuilder, Logger};
pub use logrig_types::{LogError, LoggingConfig, Result, Severity, Sink};
pub use sink::{ConsoleSink, FileSink, NullSink};
pub use time::timestamp;

/// logrig version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
