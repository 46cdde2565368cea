//! # logrig Types
//!
//! Core types, traits, and errors shared across all logrig crates.
//!
//! This crate provides the vocabulary the rest of the workspace is written in:
//!
//! - [`Severity`], the ordered set of log levels
//! - [`LoggingConfig`], the flat string mapping every sink is built from
//! - [`LogError`] and the [`Result`] alias
//! - The [`Sink`] trait implemented by every log destination
//!
//! ## Example
//!
//! ```
//! use logrig_types::{LoggingConfig, Severity};
//!
//! let config = LoggingConfig::new()
//!     .with("type", "file")
//!     .with("file_name", "app.log");
//! assert_eq!(config.get("file_name"), Some("app.log"));
//!
//! assert!(Severity::Trace < Severity::Error);
//! assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enums;
pub mod errors;
pub mod traits;

// Re-export common types for convenience
pub use config::LoggingConfig;
pub use enums::Severity;
pub use errors::{LogError, Result};
pub use traits::Sink;
