//! Concrete log sinks.
//!
//! - [`NullSink`]: accepts and discards everything (type `""`)
//! - [`ConsoleSink`]: standard output, optionally colored (type `"std_out"`)
//! - [`FileSink`]: append-mode file with periodic reopen (type `"file"`)

pub mod console;
pub mod file;
pub mod null;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use null::NullSink;
