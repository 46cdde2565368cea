//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use logrig_types::config::keys;
use logrig_types::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logrig-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive a logrig sink from many threads at once", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the sink types the factory can build
    Kinds,
}

/// Workload settings. With none of them the demo logs to a colored console.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// YAML file with the logging configuration
    #[arg(short, long, env = "LOGRIG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sink type ("", "std_out" or "file")
    #[arg(short, long)]
    pub sink: Option<String>,

    /// Target file for the file sink
    #[arg(short = 'f', long)]
    pub file_name: Option<PathBuf>,

    /// Seconds between reopens of the log file
    #[arg(short, long)]
    pub reopen_interval: Option<u64>,

    /// Lowest severity written (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Plain labels on the console
    #[arg(long)]
    pub no_color: bool,

    /// Worker threads (defaults to the number of available cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Statements per severity per thread
    #[arg(short, long, default_value_t = 10)]
    pub iterations: usize,

    /// Log whole messages instead of streaming each statement
    #[arg(long)]
    pub direct: bool,
}

impl RunArgs {
    /// Logging configuration: built-in default, then `--config`, then flags.
    pub fn logging_config(&self) -> Result<LoggingConfig> {
        let mut config = match &self.config {
            Some(path) => logrig_core::load_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => LoggingConfig::default(),
        };

        if let Some(sink) = &self.sink {
            config.set(keys::TYPE, sink.as_str());
        }
        if let Some(file_name) = &self.file_name {
            config.set(keys::FILE_NAME, file_name.to_string_lossy());
        }
        if let Some(interval) = self.reopen_interval {
            config.set(keys::REOPEN_INTERVAL, interval.to_string());
        }
        if let Some(level) = &self.level {
            config.set(keys::LEVEL, level.as_str());
        }
        if self.no_color {
            config.remove(keys::COLOR);
        }

        Ok(config)
    }

    /// Worker count, never zero.
    pub fn thread_count(&self) -> usize {
        self.threads
            .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()))
            .max(1)
    }
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            None => run::execute(&self.run),
            Some(Commands::Kinds) => kinds::execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("logrig-demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_is_colored_console() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.run.iterations, 10);
        assert_eq!(cli.run.logging_config().unwrap(), LoggingConfig::default());
        assert!(cli.run.thread_count() >= 1);
    }

    #[test]
    fn test_flags_build_file_config() {
        let cli = parse(&[
            "--sink",
            "file",
            "--file-name",
            "/tmp/demo.log",
            "--reopen-interval",
            "1",
            "--level",
            "warn",
            "--no-color",
            "--threads",
            "0",
        ]);
        let config = cli.run.logging_config().unwrap();
        assert_eq!(config.get("type"), Some("file"));
        assert_eq!(config.get("file_name"), Some("/tmp/demo.log"));
        assert_eq!(config.get("reopen_interval"), Some("1"));
        assert_eq!(config.get("level"), Some("warn"));
        assert!(!config.contains("color"));
        assert_eq!(cli.run.thread_count(), 1);
    }

    #[test]
    fn test_subcommands() {
        assert!(matches!(parse(&["kinds"]).command, Some(Commands::Kinds)));

        let err = Cli::try_parse_from(["logrig-demo", "--version"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(Cli::try_parse_from(["logrig-demo", "version"]).is_err());
    }
}
