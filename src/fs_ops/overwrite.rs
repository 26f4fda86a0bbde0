//! Overwrite confirmation.
//! The swap core never asks the user anything itself; callers inject an
//! `OverwriteDecision` consulted once per occupied destination.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Decide whether an existing file at `destination` may be deleted and replaced.
pub trait OverwriteDecision {
    fn allow_overwrite(&mut self, destination: &Path) -> bool;
}

impl<F> OverwriteDecision for F
where
    F: FnMut(&Path) -> bool,
{
    fn allow_overwrite(&mut self, destination: &Path) -> bool {
        self(destination)
    }
}

/// Configured overwrite policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Prompt the user; non-interactive callers treat this as "no".
    #[default]
    Ask,
    /// Replace occupied destinations without asking.
    Always,
    /// Never replace; the swap is not performed.
    Never,
}

impl OverwritePolicy {
    /// Parse common names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" | "prompt" => Some(OverwritePolicy::Ask),
            "always" | "yes" | "true" => Some(OverwritePolicy::Always),
            "never" | "no" | "false" => Some(OverwritePolicy::Never),
            _ => None,
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OverwritePolicy::Ask => "ask",
            OverwritePolicy::Always => "always",
            OverwritePolicy::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for OverwritePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid overwrite policy: '{s}'"))
    }
}

impl OverwriteDecision for OverwritePolicy {
    fn allow_overwrite(&mut self, _destination: &Path) -> bool {
        matches!(self, OverwritePolicy::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_decisions() {
        let mut seen = Vec::new();
        let mut decide = |p: &Path| {
            seen.push(p.to_path_buf());
            true
        };
        assert!(decide.allow_overwrite(Path::new("/d1/b.txt")));
        assert_eq!(seen, vec![Path::new("/d1/b.txt").to_path_buf()]);
    }

    #[test]
    fn policy_parse_and_decide() {
        assert_eq!(OverwritePolicy::parse("ALWAYS"), Some(OverwritePolicy::Always));
        assert_eq!(OverwritePolicy::parse(" never "), Some(OverwritePolicy::Never));
        assert_eq!(OverwritePolicy::parse("prompt"), Some(OverwritePolicy::Ask));
        assert!("sometimes".parse::<OverwritePolicy>().is_err());

        let p = Path::new("x");
        assert!(OverwritePolicy::Always.allow_overwrite(p));
        assert!(!OverwritePolicy::Never.allow_overwrite(p));
        assert!(!OverwritePolicy::Ask.allow_overwrite(p));
    }
}
