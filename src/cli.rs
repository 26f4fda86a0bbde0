//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The two paths are positional; they may be omitted only with --print-config / --init-config.
//! - --yes-to-overwrite and --no-to-overwrite are mutually exclusive and override the config policy.
//! - --debug is a shorthand for --log-level debug.

use clap::{ArgAction, Parser, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};
use crate::fs_ops::OverwritePolicy;

/// Swap the names of two files.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "swap-names",
    author,
    version,
    about = "Swap the names of two files, even across directories"
)]
pub struct Args {
    /// First file.
    #[arg(
        value_name = "PATH1",
        value_hint = ValueHint::FilePath,
        required_unless_present_any = ["print_config", "init_config"]
    )]
    pub path1: Option<PathBuf>,

    /// Second file.
    #[arg(
        value_name = "PATH2",
        value_hint = ValueHint::FilePath,
        required_unless_present_any = ["print_config", "init_config"]
    )]
    pub path2: Option<PathBuf>,

    /// Replace a file already holding a destination name without asking.
    #[arg(
        short = 'y',
        long,
        conflicts_with = "no_to_overwrite",
        help = "Replace existing files at the destination names without asking"
    )]
    pub yes_to_overwrite: bool,

    /// Never replace an existing file; the swap is skipped instead.
    #[arg(
        short = 'n',
        long,
        help = "Never replace existing files; skip the swap instead"
    )]
    pub no_to_overwrite: bool,

    /// Undo completed renames if the swap fails halfway.
    #[arg(long, help = "Try to undo completed renames if the swap fails halfway")]
    pub rollback: bool,

    /// Dry-run: show what would happen but do not modify the filesystem.
    #[arg(long, help = "Show the planned renames, but do not modify files")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        action = ArgAction::SetTrue,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_parser = clap::value_parser!(LogLevel),
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where swap-names looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a commented template config to the config location, then exit.
    #[arg(long, help = "Create a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Both paths, sanitized, when given.
    pub fn resolved_paths(&self) -> Option<(PathBuf, PathBuf)> {
        match (&self.path1, &self.path2) {
            (Some(a), Some(b)) => Some((Self::sanitize_path(a), Self::sanitize_path(b))),
            _ => None,
        }
    }

    /// An existing path is used exactly as given (spaces, non-UTF-8 bytes and
    /// all). Quote repair only applies to a UTF-8 path that does not exist.
    fn sanitize_path(p: &Path) -> PathBuf {
        if fs::symlink_metadata(p).is_ok() {
            return p.to_path_buf();
        }
        match p.to_str() {
            Some(s) => Self::sanitize_str(s),
            None => p.to_path_buf(),
        }
    }

    /// Undo common shell quoting mistakes (PowerShell/CMD leave the quotes in).
    /// Only a matched surrounding pair is removed: quotes inside names are legitimate.
    fn sanitize_str(s: &str) -> PathBuf {
        let trimmed = s.trim();
        let mut inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.to_string()
        };

        // A file path never ends in a separator; drop one left over from quoting.
        if inner.len() > 1 && (inner.ends_with('\\') || inner.ends_with('/')) {
            inner.pop();
        }

        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Overwrite policy chosen on the command line, if any.
    pub fn overwrite_override(&self) -> Option<OverwritePolicy> {
        if self.yes_to_overwrite {
            Some(OverwritePolicy::Always)
        } else if self.no_to_overwrite {
            Some(OverwritePolicy::Never)
        } else {
            None
        }
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if let Some(policy) = self.overwrite_override() {
            cfg.overwrite = policy;
        }
        if self.rollback {
            cfg.rollback = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
