//! Single rename step used by every stage of a swap.
//! - Refuses to replace an entry that appeared at the destination since planning.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;

use crate::errors::SwapError;

use super::helpers::io_error_with_help;
use super::util::{entry_exists, fsync_dir};

pub(super) fn rename_no_clobber(src: &Path, dst: &Path) -> Result<(), SwapError> {
    // Every destination was freed or checked during planning; anything here now
    // was created by another process and must not be silently replaced.
    if entry_exists(dst) {
        return Err(io_error_with_help("rename onto", dst)(io::Error::from(
            io::ErrorKind::AlreadyExists,
        )));
    }

    fs::rename(src, dst).map_err(io_error_with_help("rename", src))?;
    trace!(src = %src.display(), dst = %dst.display(), "renamed");

    if let Some(parent) = dst.parent() {
        // A failed fsync must not turn a completed rename into an error.
        let _ = fsync_dir(parent);
    }

    Ok(())
}
