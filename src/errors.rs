//! Typed error definitions for swap_names.
//! Separates "nothing happened" failures from "a swap was left half done",
//! so callers can tell the user whether any file needs manual recovery.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::helpers::describe_io_error;

/// Exit codes used by the CLI. Kept stable for scripting.
pub mod exit_code {
    pub const UNEXPECTED: u8 = 1;
    pub const PRECONDITION: u8 = 3;
    pub const IO: u8 = 4;
    pub const INCOMPLETE: u8 = 5;
}

/// One rename (or delete) in the swap sequence, named for error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStep {
    /// Removing an existing destination the caller approved overwriting.
    RemoveApproved,
    /// First path to its temporary name.
    FirstToTemp,
    /// Second path to its temporary name.
    SecondToTemp,
    /// First temporary name to its final name.
    FirstToFinal,
    /// Second temporary name to its final name.
    SecondToFinal,
}

impl fmt::Display for SwapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwapStep::RemoveApproved => "remove approved destination",
            SwapStep::FirstToTemp => "rename first file to temporary name",
            SwapStep::SecondToTemp => "rename second file to temporary name",
            SwapStep::FirstToFinal => "rename first file to its new name",
            SwapStep::SecondToFinal => "rename second file to its new name",
        };
        f.write_str(s)
    }
}

/// A file left under a temporary name after a failed swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stranded {
    /// Where the file is now.
    pub current: PathBuf,
    /// The name it had before the swap started.
    pub original: PathBuf,
}

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotRegularFile(PathBuf),

    #[error("Path has no file name component: {0}")]
    MissingFileName(PathBuf),

    #[error("Both paths refer to the same file: {0}")]
    SamePath(PathBuf),

    #[error("Destination is an existing directory: {0}")]
    DestinationIsDirectory(PathBuf),

    #[error("{}", describe_io_error(.op, .path, .source))]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", incomplete_message(.step, .source, .removed, .stranded, .rolled_back))]
    Incomplete {
        step: SwapStep,
        #[source]
        source: Box<SwapError>,
        /// Approved overwrite targets already deleted; these are gone for good.
        removed: Vec<PathBuf>,
        stranded: Vec<Stranded>,
        rolled_back: bool,
    },
}

impl SwapError {
    /// Stable machine-readable kind used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SwapError::NotFound(_) => "not_found",
            SwapError::NotRegularFile(_) => "not_regular_file",
            SwapError::MissingFileName(_) => "missing_file_name",
            SwapError::SamePath(_) => "same_path",
            SwapError::DestinationIsDirectory(_) => "destination_is_directory",
            SwapError::Io { .. } => "io",
            SwapError::Incomplete { .. } => "incomplete",
        }
    }

    /// Process exit code for this failure.
    pub fn code(&self) -> u8 {
        match self {
            SwapError::NotFound(_)
            | SwapError::NotRegularFile(_)
            | SwapError::MissingFileName(_)
            | SwapError::SamePath(_)
            | SwapError::DestinationIsDirectory(_) => exit_code::PRECONDITION,
            SwapError::Io { .. } => exit_code::IO,
            SwapError::Incomplete { .. } => exit_code::INCOMPLETE,
        }
    }

    /// True when the error was raised before the filesystem was touched.
    pub fn is_precondition(&self) -> bool {
        self.code() == exit_code::PRECONDITION
    }

    /// Files still under temporary names, if any.
    pub fn stranded(&self) -> &[Stranded] {
        match self {
            SwapError::Incomplete { stranded, .. } => stranded,
            _ => &[],
        }
    }
}

fn incomplete_message(
    step: &SwapStep,
    source: &SwapError,
    removed: &[PathBuf],
    stranded: &[Stranded],
    rolled_back: &bool,
) -> String {
    let mut msg = format!("Swap left incomplete: failed to {step}: {source}");
    if *rolled_back {
        msg.push_str("; earlier renames were rolled back");
    }
    for p in removed {
        msg.push_str(&format!("\n  already removed: '{}'", p.display()));
    }
    for s in stranded {
        msg.push_str(&format!(
            "\n  stranded: '{}' (was '{}')",
            s.current.display(),
            s.original.display()
        ));
    }
    msg
}
