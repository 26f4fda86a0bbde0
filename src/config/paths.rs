//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SWAP_NAMES_CONFIG";

/// Config path: `$SWAP_NAMES_CONFIG` if set, else the OS config dir.
/// A relative override is resolved against the current directory.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let p = PathBuf::from(p);
        if p.is_absolute() {
            return Ok(p);
        }
        return Ok(env::current_dir()?.join(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("swap_names");
        base.push("config.xml");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".config").join("swap_names").join("config.xml"))
        .ok_or_else(|| anyhow!("cannot determine a config directory (no config dir and HOME unset)"))
}

/// OS-appropriate default log file path (data dir). Not created here.
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("swap_names");
        base.push("swap_names.log");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("swap_names")
                .join("swap_names.log")
        })
        .ok_or_else(|| anyhow!("cannot determine a data directory (no data dir and HOME unset)"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
