//! Filesystem operations: the file name swap and its building blocks.

pub(crate) mod helpers;
mod overwrite;
mod plan;
mod rename;
mod swap;
mod util;

pub use helpers::io_error_with_help;
pub use overwrite::{OverwriteDecision, OverwritePolicy};
pub use plan::{FilePathRef, SwapPlan, TEMP_PREFIX};
pub use swap::{swap, swap_file_names, swap_with_options, SwapOptions, SwapOutcome};
