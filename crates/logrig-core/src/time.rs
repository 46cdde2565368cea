//! Timestamp formatting for log lines.

use chrono::{DateTime, Utc};

/// Layout of every timestamp: `YYYY/MM/DD HH:MM:SS.ffffff`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Width of a formatted timestamp for years 0 through 9999.
pub const TIMESTAMP_WIDTH: usize = 26;

/// Current UTC wall-clock time, formatted as `YYYY/MM/DD HH:MM:SS.ffffff`.
///
/// Sub-second precision depends on the system clock, but six fractional
/// digits are always printed.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Format a specific instant the way [`timestamp`] does.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
