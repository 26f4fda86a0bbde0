//! I/O helper utilities.
//!
//! Turns a raw io::Error into a typed SwapError whose message carries the
//! operation, the offending path and a platform-aware hint.
//!
//! Usage:
//!   fs::rename(a, b).map_err(io_error_with_help("rename", a))?;

use std::io;
use std::path::Path;

use crate::errors::SwapError;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions on the directory.");
                }
                libc::EBUSY | libc::ETXTBSY => {
                    msg.push_str("; resource busy, another process is using the file.");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, it may have been moved or deleted by another process.");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str("; already exists, another process created an entry with this name.");
                }
                libc::EISDIR => {
                    msg.push_str("; destination is a directory.");
                }
                libc::ENOSPC => {
                    msg.push_str("; insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem, cannot rename here.");
                }
                libc::ELOOP => {
                    msg.push_str("; too many symbolic link levels (ELOOP), possible symlink cycle.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long, shorten path segments.");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem rename is not possible.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions."), // ERROR_ACCESS_DENIED
                32 | 33 => msg.push_str("; sharing violation, the file is in use."), // SHARING / LOCK_VIOLATION
                2 | 3 => msg.push_str("; path not found, it may have been moved or deleted."), // FILE / PATH NOT FOUND
                80 | 183 => msg.push_str("; already exists, another process created an entry with this name."), // FILE_EXISTS / ALREADY_EXISTS
                112 => msg.push_str("; insufficient disk space."), // ERROR_DISK_FULL
                19 => msg.push_str("; write protected / read-only media."), // ERROR_WRITE_PROTECT
                206 => msg.push_str("; filename or path too long (MAX_PATH exceeded)."), // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions on the directory.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, it may have been moved or deleted by another process.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str("; already exists, another process created an entry with this name.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error
/// into `SwapError::Io` tagged with the operation and path.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> SwapError + 'a {
    move |source: io::Error| SwapError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}
