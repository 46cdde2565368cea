//! Core trait definitions for logrig abstractions.

use crate::enums::Severity;
use crate::errors::Result;
use std::fmt;

/// A destination for log lines.
///
/// Implementers provide the raw write path and, optionally, the
/// level-filtering and decoration step. The provided [`Sink::log`] ties the
/// two together, so most sinks only implement [`Sink::log_raw`] and
/// [`Sink::render`].
///
/// Sinks are shared between threads; every method takes `&self` and any
/// mutable state lives behind the implementer's own lock.
pub trait Sink: Send + Sync {
    /// Type tag the sink is registered under (e.g. `"file"`).
    fn kind(&self) -> &'static str;

    /// Write `message` verbatim. No filtering, no timestamp.
    fn log_raw(&self, message: &str) -> Result<()>;

    /// Build the decorated line for `message`, or `None` when `level` is
    /// below the sink's cutoff.
    ///
    /// The default renders nothing, which makes a sink that only accepts
    /// raw writes.
    fn render(&self, message: &str, level: Severity) -> Option<String> {
        let _ = (message, level);
        None
    }

    /// Filter, decorate and write `message` at `level`.
    fn log(&self, message: &str, level: Severity) -> Result<()> {
        match self.render(message, level) {
            Some(line) => self.log_raw(&line),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind()).finish()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn log_raw(&self, message: &str) -> Result<()> {
        (**self).log_raw(message)
    }

    fn render(&self, message: &str, level: Severity) -> Option<String> {
        (**self).render(message, level)
    }

    fn log(&self, message: &str, level: Severity) -> Result<()> {
        (**self).log(message, level)
    }
}
