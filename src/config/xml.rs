//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`); never implicitly.
//!
//! Notes:
//! - Unknown fields and unparsable values are errors, so typos surface instead of being ignored.
//! - Surrounding whitespace in values is trimmed; empty values count as unset.

use anyhow::{anyhow, bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor, CONFIG_ENV};
use super::types::{Config, LogLevel};
use crate::fs_ops::OverwritePolicy;
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
/// Everything is read as text and parsed afterwards so whitespace can be trimmed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    overwrite: Option<String>,
    rollback: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => bail!("invalid boolean for <{field}>: '{s}'"),
    }
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.overwrite.as_deref()) {
        cfg.overwrite = s.parse::<OverwritePolicy>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = non_empty(parsed.rollback.as_deref()) {
        cfg.rollback = parse_bool("rollback", s)?;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config '{}'", path.display()))
}

/// Load the effective config file.
///
/// Returns the config and the file it came from. A missing file at the
/// default location means built-in defaults; a missing file named by
/// `$SWAP_NAMES_CONFIG` is an error.
pub fn load_config() -> Result<(Config, Option<PathBuf>)> {
    let explicit = env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let path = match default_config_path() {
        Ok(p) => p,
        Err(_) if !explicit => return Ok((Config::default(), None)),
        Err(e) => return Err(e),
    };

    if !path.exists() {
        if explicit {
            bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
        }
        return Ok((Config::default(), None));
    }
    if path.is_dir() {
        bail!("config path is a directory, expected a file: {}", path.display());
    }

    let cfg = load_config_from_xml_path(&path)?;
    Ok((cfg, Some(path)))
}

/// Create a template config file and parent directory (best-effort permissions).
/// Refuses to overwrite an existing file or to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!("Refusing to create config: ancestor of {} is a symlink", path.display());
    }
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/swap_names.log".into());

    let content = format!(
        "<!--\n  swap_names configuration (XML)\n\n  log_level  -> quiet | normal | info | debug\n  log_file   -> path to a log file (optional; stderr is always used), e.g. {}\n  overwrite  -> ask | always | never\n                what to do when the other file's name is already taken in a directory\n  rollback   -> true | false\n                undo completed renames if a swap fails halfway\n\n  CLI flags override these values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <overwrite>ask</overwrite>\n  <rollback>false</rollback>\n</config>\n",
        suggested_log
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_all_fields_with_whitespace() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(
            &p,
            "<config>\n  <log_level> debug </log_level>\n  <log_file>  /tmp/s.log </log_file>\n  <overwrite>ALWAYS</overwrite>\n  <rollback> true </rollback>\n</config>\n",
        )
        .unwrap();
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/s.log")));
        assert_eq!(cfg.overwrite, OverwritePolicy::Always);
        assert!(cfg.rollback);
    }

    #[test]
    fn empty_values_keep_defaults() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config><log_file></log_file><overwrite> </overwrite></config>").unwrap();
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.overwrite, OverwritePolicy::Ask);
        assert!(!cfg.rollback);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config><download_base>/x</download_base></config>").unwrap();
        let err = load_config_from_xml_path(&p).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }

    #[test]
    fn bad_values_are_rejected() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config><overwrite>sometimes</overwrite></config>").unwrap();
        assert!(load_config_from_xml_path(&p).is_err());
        fs::write(&p, "<config><rollback>maybe</rollback></config>").unwrap();
        assert!(load_config_from_xml_path(&p).is_err());
    }

    #[test]
    fn template_round_trips_and_is_not_overwritten() {
        let td = tempdir().unwrap();
        let base = fs::canonicalize(td.path()).unwrap();
        let p = base.join("nested").join("config.xml");
        create_template_config(&p).unwrap();
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert_eq!(cfg.overwrite, OverwritePolicy::Ask);
        assert!(!cfg.rollback);
        assert!(create_template_config(&p).is_err());
    }
}
