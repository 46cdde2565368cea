//! Process-wide logger.
//!
//! A thin convenience layer over one lazily created [`Logger`]. The first
//! successful initialisation wins and lives until the process exits;
//! configurations supplied afterwards are ignored. Code that can take a
//! logger as a parameter should prefer an owned [`Logger`] instead.
//!
//! ## Example
//!
//! ```no_run
//! use logrig_types::LoggingConfig;
//!
//! logrig_core::configure(&LoggingConfig::new().with("type", "file").with("file_name", "app.log"))?;
//!
//! logrig_core::info("service started\n")?;
//! logrig_core::error_line()?.push("request ").push(17).push(" failed").endl()?;
//! # Ok::<(), logrig_types::LogError>(())
//! ```

use crate::logger::{LineBuilder, Logger};
use logrig_types::{LoggingConfig, Result, Severity};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// The process-wide logger, creating it on first use.
///
/// On first use the sink is produced from `config`, or from
/// [`LoggingConfig::default`] (colored console) when `None`. Once a logger
/// exists `config` is ignored. A failed construction leaves nothing
/// installed, so a later call may try again.
pub fn get_logger(config: Option<&LoggingConfig>) -> Result<&'static Logger> {
    LOGGER.get_or_try_init(|| {
        let logger = match config {
            Some(config) => Logger::from_config(config)?,
            None => Logger::from_config(&LoggingConfig::default())?,
        };
        tracing::debug!(kind = logger.kind(), "Initialized process-wide logger");
        Ok(logger)
    })
}

/// Create the process-wide logger from `config`, unless one already exists.
pub fn configure(config: &LoggingConfig) -> Result<()> {
    get_logger(Some(config)).map(|_| ())
}

/// Install an already built logger, unless one already exists.
///
/// Returns the logger that ended up installed, which is not `logger` if
/// another one got there first.
pub fn install(logger: Logger) -> &'static Logger {
    match LOGGER.try_insert(logger) {
        Ok(installed) => installed,
        Err((installed, _rejected)) => {
            tracing::debug!(kind = installed.kind(), "Process-wide logger already installed");
            installed
        }
    }
}

/// Whether the process-wide logger exists yet.
pub fn is_configured() -> bool {
    LOGGER.get().is_some()
}

/// Log `message` at `level` through the process-wide logger.
pub fn log(message: &str, level: Severity) -> Result<()> {
    get_logger(None)?.log(message, level)
}

/// Write `message` verbatim through the process-wide logger.
pub fn log_raw(message: &str) -> Result<()> {
    get_logger(None)?.log_raw(message)
}

/// Start a streamed statement at `level` on the process-wide logger.
pub fn line(level: Severity) -> Result<LineBuilder<'static>> {
    Ok(get_logger(None)?.line(level))
}

macro_rules! severity_entry_points {
    ($($level:ident => $log:ident, $line:ident;)*) => {
        $(
            #[doc = concat!("Log `message` at `", stringify!($level), "` through the process-wide logger.")]
            pub fn $log(message: &str) -> Result<()> {
                log(message, Severity::$level)
            }

            #[doc = concat!("Start a streamed `", stringify!($level), "` statement on the process-wide logger.")]
            pub fn $line() -> Result<LineBuilder<'static>> {
                line(Severity::$level)
            }
        )*
    };
}

severity_entry_points! {
    Trace => trace, trace_line;
    Debug => debug, debug_line;
    Info => info, info_line;
    Warn => warn, warn_line;
    Error => error, error_line;
}
