#[cfg(unix)]
use std::fs::File;
use std::io;
use std::path::Path;

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// True if something (file, dir or dangling symlink) occupies `path`.
pub(super) fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
