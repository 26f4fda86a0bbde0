//! Core library for `swap_names`.
//!
//! Exchanges the names of two files, keeping each file in its own directory:
//! `/d1/a.txt` and `/d2/b.txt` become `/d1/b.txt` (old a.txt content) and
//! `/d2/a.txt` (old b.txt content).
//!
//! The core is UI-free: whether an unrelated file occupying a destination
//! name may be replaced is decided by a caller-supplied [`OverwriteDecision`]
//! (any `FnMut(&Path) -> bool` works).
//!
//! ```no_run
//! let swapped = swap_names::swap("/d/a.txt", "/d/b.txt", |_dest| false)?;
//! assert!(swapped);
//! # Ok::<(), swap_names::SwapError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;

pub use config::{default_config_path, default_log_path, path_has_symlink_ancestor, Config, LogLevel};
pub use errors::{Stranded, SwapError, SwapStep};
pub use fs_ops::{
    swap, swap_file_names, swap_with_options, FilePathRef, OverwriteDecision, OverwritePolicy,
    SwapOptions, SwapOutcome, SwapPlan,
};

/// Convenience re-exports for callers.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::SwapError as Error;
    pub use crate::fs_ops::{
        swap, swap_file_names, swap_with_options, OverwriteDecision, OverwritePolicy, SwapOptions,
        SwapOutcome, SwapPlan,
    };

    /// Result alias used throughout the swap API.
    pub type SwapResult<T> = std::result::Result<T, crate::errors::SwapError>;
}
