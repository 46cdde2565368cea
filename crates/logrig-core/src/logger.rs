//! The logger handle and its streaming line builder.
//!
//! A [`Logger`] owns one sink and forwards to it. For statements assembled
//! from several pieces it hands out a [`LineBuilder`], which holds the
//! logger's streaming lock for as long as it lives. Two threads building
//! lines at the same time therefore never mix their pieces, and the lock is
//! released however the builder goes away.
//!
//! ## Example
//!
//! ```
//! use logrig_core::{Logger, NullSink};
//! use logrig_types::Severity;
//!
//! let logger = Logger::from_sink(NullSink);
//! logger.log("direct\n", Severity::Info).unwrap();
//! logger
//!     .line(Severity::Warn)
//!     .push("disk at ")
//!     .push(93)
//!     .push('%')
//!     .endl()
//!     .unwrap();
//! ```

use crate::factory::{default_factory, SinkFactory};
use logrig_types::{LoggingConfig, Result, Severity, Sink};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;

/// Owned handle to a sink, safe to share between threads.
///
/// Wrap it in an `Arc` to hand it to the components that log, or install it
/// process-wide with [`crate::global::install`].
pub struct Logger {
    sink: Box<dyn Sink>,
    stream: Mutex<String>,
}

impl Logger {
    /// Wrap an already boxed sink.
    pub fn new(sink: Box<dyn Sink>) -> Self {
        Self {
            sink,
            stream: Mutex::new(String::new()),
        }
    }

    /// Wrap a concrete sink.
    pub fn from_sink(sink: impl Sink + 'static) -> Self {
        Self::new(Box::new(sink))
    }

    /// Produce the sink through the process-wide default factory.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        Self::from_config_with(default_factory(), config)
    }

    /// Produce the sink through a specific factory.
    pub fn from_config_with(factory: &SinkFactory, config: &LoggingConfig) -> Result<Self> {
        factory.produce(config).map(Self::new)
    }

    /// The sink this logger writes to.
    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    /// Type tag of the sink.
    pub fn kind(&self) -> &'static str {
        self.sink.kind()
    }

    /// Filter, decorate and write `message` at `level`.
    ///
    /// Does not take the streaming lock.
    pub fn log(&self, message: &str, level: Severity) -> Result<()> {
        self.sink.log(message, level)
    }

    /// Write `message` verbatim.
    pub fn log_raw(&self, message: &str) -> Result<()> {
        self.sink.log_raw(message)
    }

    /// Start a streamed statement at the lowest severity.
    ///
    /// Blocks while another statement is in progress. A thread must not
    /// start a second statement while it still holds a builder.
    pub fn stream(&self) -> LineBuilder<'_> {
        LineBuilder {
            sink: self.sink.as_ref(),
            buffer: self.stream.lock(),
            level: Severity::lowest(),
        }
    }

    /// Start a streamed statement only if no other one is in progress.
    pub fn try_stream(&self) -> Option<LineBuilder<'_>> {
        self.stream.try_lock().map(|buffer| LineBuilder {
            sink: self.sink.as_ref(),
            buffer,
            level: Severity::lowest(),
        })
    }

    /// Start a streamed statement at `level`.
    pub fn line(&self, level: Severity) -> LineBuilder<'_> {
        self.stream().set_level(level)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("kind", &self.sink.kind())
            .field("streaming", &self.stream.is_locked())
            .finish()
    }
}

/// One statement being assembled from pieces.
///
/// Created by [`Logger::stream`] and friends. [`flush`](Self::flush) and
/// [`endl`](Self::endl) send the text and end the statement. If the builder
/// is dropped with text still pending, that text is sent (errors are
/// discarded) and the lock is released all the same.
#[must_use = "a line is only written when flushed or dropped"]
pub struct LineBuilder<'a> {
    sink: &'a dyn Sink,
    buffer: MutexGuard<'a, String>,
    level: Severity,
}

impl<'a> LineBuilder<'a> {
    /// Severity the statement will be written at.
    pub fn set_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Current severity of the statement.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Text collected so far.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Append anything printable.
    pub fn push(mut self, value: impl fmt::Display) -> Self {
        // Writing into a String cannot fail.
        let _ = fmt::Write::write_fmt(&mut *self.buffer, format_args!("{value}"));
        self
    }

    /// Send the collected text, even if empty, and end the statement.
    pub fn flush(mut self) -> Result<()> {
        self.dispatch()
    }

    /// Append a newline, send, and end the statement.
    pub fn endl(mut self) -> Result<()> {
        self.buffer.push('\n');
        self.dispatch()
    }

    fn dispatch(&mut self) -> Result<()> {
        let result = self.sink.log(&self.buffer, self.level);
        self.buffer.clear();
        self.level = Severity::lowest();
        result
    }
}

impl fmt::Write for LineBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for LineBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuilder")
            .field("level", &self.level)
            .field("pending", &self.buffer.as_str())
            .finish()
    }
}

impl Drop for LineBuilder<'_> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            let _ = self.dispatch();
        }
    }
}
