//! Without configuration the process-wide logger is a colored console.

use logrig_core::{LabelStyle, Severity};

#[test]
fn test_default_is_colored_console() {
    let logger = logrig_core::get_logger(None).unwrap();
    assert_eq!(logger.kind(), "std_out");

    let line = logger.sink().render("hello", Severity::Warn).unwrap();
    assert!(line.ends_with(&format!("{}hello", LabelStyle::Colored.label(Severity::Warn))));

    logrig_core::warn("default logger reached\n").unwrap();
    logrig_core::info_line().unwrap().push("streamed").endl().unwrap();
}
