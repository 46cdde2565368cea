//! List registered sink types.

use anyhow::Result;
use colored::Colorize;

pub fn execute() -> Result<()> {
    for kind in logrig_core::default_factory().kinds() {
        let shown = if kind.is_empty() { "\"\" (null)" } else { kind };
        println!("{}", shown.cyan());
    }
    Ok(())
}
