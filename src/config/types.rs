//! Settings shared by the XML loader and the CLI overrides.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs_ops::{OverwritePolicy, SwapOptions};

/// Verbosity as users write it in config.xml or `--log-level`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Each completed step
    Info,
    /// Everything, including each rename step
    Debug,
}

impl LogLevel {
    /// Case-insensitive; accepts tracing level names as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Verbosity of stderr (and the log file)
    pub log_level: LogLevel,
    /// Extra log destination
    pub log_file: Option<PathBuf>,
    /// What to do when a destination is already taken
    pub overwrite: OverwritePolicy,
    /// Try to undo completed renames when a swap fails halfway
    pub rollback: bool,
    /// Print the plan but do not modify the filesystem
    pub dry_run: bool,
}

impl Config {
    /// Options passed to the swap core.
    pub fn swap_options(&self) -> SwapOptions {
        SwapOptions {
            rollback_on_failure: self.rollback,
        }
    }
}
