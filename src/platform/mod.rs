//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

use std::path::Path;

#[cfg(unix)]
pub use unix::{
    open_log_file_secure_append, set_dir_mode_0700, set_file_mode_0600,
    write_config_secure_new_0600,
};

#[cfg(not(unix))]
pub use windows::{
    open_log_file_secure_append, set_dir_mode_0700, set_file_mode_0600,
    write_config_secure_new_0600,
};

/// Whether the native filesystem of this OS compares names case-insensitively.
/// Windows (NTFS) and macOS (APFS/HFS+ default) do; other Unixes do not.
pub const CASE_INSENSITIVE_NAMES: bool = cfg!(any(windows, target_os = "macos"));

/// Compare two paths under the OS-native case rule.
pub fn paths_equal(a: &Path, b: &Path) -> bool {
    if CASE_INSENSITIVE_NAMES {
        a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_paths_are_equal() {
        assert!(paths_equal(Path::new("/d/a.txt"), Path::new("/d/a.txt")));
        assert!(!paths_equal(Path::new("/d/a.txt"), Path::new("/d/b.txt")));
    }

    #[test]
    fn case_rule_follows_os() {
        let same = paths_equal(Path::new("/D/A.txt"), Path::new("/d/a.txt"));
        assert_eq!(same, CASE_INSENSITIVE_NAMES);
    }
}
