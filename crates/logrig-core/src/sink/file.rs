//! Append-mode file sink with periodic reopen.
//!
//! The file is reopened once the configured interval has elapsed, checked
//! after every write. Reopening unconditionally means a file that was moved
//! or deleted by an external rotation tool is recreated within one interval.

use crate::labels::{format_line, Cutoff, LabelStyle};
use logrig_types::config::keys;
use logrig_types::{LogError, LoggingConfig, Result, Severity, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Reopen interval used when `reopen_interval` is not configured.
pub const DEFAULT_REOPEN_INTERVAL: Duration = Duration::from_secs(300);

/// Handle and reopen bookkeeping, guarded together.
#[derive(Debug)]
struct FileState {
    file: Option<File>,
    last_reopen: Instant,
    reopens: u64,
}

/// Writes plain-labelled lines to a file opened in append mode.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    reopen_interval: Duration,
    cutoff: Cutoff,
    state: Mutex<FileState>,
}

impl FileSink {
    /// Type tag in the factory.
    pub const KIND: &'static str = "file";

    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn open(
        path: impl Into<PathBuf>,
        reopen_interval: Duration,
        cutoff: Cutoff,
    ) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path).map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            reopen_interval,
            cutoff,
            state: Mutex::new(FileState {
                file: Some(file),
                last_reopen: Instant::now(),
                reopens: 0,
            }),
        })
    }

    /// Build from `file_name` (required), `reopen_interval` and `level`.
    ///
    /// # Errors
    ///
    /// Configuration errors for a missing `file_name` or an interval that is
    /// not a non-negative whole number of seconds; [`LogError::Open`] if the
    /// file cannot be opened.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let path = config.get(keys::FILE_NAME).ok_or(LogError::MissingKey {
            kind: Self::KIND,
            key: keys::FILE_NAME,
        })?;

        let reopen_interval = match config.get(keys::REOPEN_INTERVAL) {
            Some(raw) => parse_interval(raw)?,
            None => DEFAULT_REOPEN_INTERVAL,
        };

        Self::open(path, reopen_interval, Cutoff::from_config(config)?)
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time between reopens.
    pub fn reopen_interval(&self) -> Duration {
        self.reopen_interval
    }

    /// Filter in use.
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    /// Number of successful reopens since construction.
    pub fn reopens(&self) -> u64 {
        self.state.lock().reopens
    }

    fn reopen_if_due(&self, state: &mut FileState) -> Result<()> {
        if state.last_reopen.elapsed() > self.reopen_interval {
            self.reopen(state)?;
        }
        Ok(())
    }

    fn reopen(&self, state: &mut FileState) -> Result<()> {
        // Dropping the handle closes it; close errors are not reported by std.
        state.file = None;

        match open_append(&self.path) {
            Ok(file) => {
                state.file = Some(file);
                state.last_reopen = Instant::now();
                state.reopens += 1;
                debug!(
                    path = %self.path.display(),
                    reopens = state.reopens,
                    "Reopened log file"
                );
                Ok(())
            }
            Err(source) => {
                warn!(
                    path = %self.path.display(),
                    error = %source,
                    "Failed to reopen log file"
                );
                Err(LogError::Reopen {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

impl Sink for FileSink {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn log_raw(&self, message: &str) -> Result<()> {
        let mut state = self.state.lock();

        // A failed reopen leaves no handle; try again before writing.
        if state.file.is_none() {
            self.reopen(&mut state)?;
        }
        let written = match state.file.as_mut() {
            Some(file) => file.write_all(message.as_bytes()).and_then(|()| file.flush()),
            None => Ok(()),
        };

        // The reopen check runs whether or not the write succeeded, so a
        // handle that went bad is replaced within one interval.
        let reopened = self.reopen_if_due(&mut state);
        written?;
        reopened
    }

    fn render(&self, message: &str, level: Severity) -> Option<String> {
        self.cutoff
            .allows(level)
            .then(|| format_line(LabelStyle::Plain, message, level))
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_interval(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| LogError::invalid_value(keys::REOPEN_INTERVAL, raw, e))
}
