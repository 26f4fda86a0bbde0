//! File name swap.
//!
//! Sequence: confirm overwrites, delete approved destinations, move both files
//! to temporary names, then move each temporary name to the other file's
//! original name. Both original names are free before either is reused, so two
//! files never share a name at any point.
//!
//! There is no transaction: a failure after the first rename leaves the swap
//! half done. The error then lists every file still under a temporary name;
//! `SwapOptions::rollback_on_failure` additionally tries to undo the renames
//! that did complete. Deleted overwrite targets are never restored; the error
//! names them.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::errors::{Stranded, SwapError, SwapStep};

use super::helpers::io_error_with_help;
use super::overwrite::OverwriteDecision;
use super::plan::SwapPlan;
use super::rename::rename_no_clobber;

/// Knobs for a single swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapOptions {
    /// On a mid-sequence failure, try to rename completed steps back.
    pub rollback_on_failure: bool,
}

/// Result of a swap that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Names exchanged. `first`/`second` are the new paths of the files
    /// originally passed first/second.
    Swapped { first: PathBuf, second: PathBuf },
    /// The overwrite decision refused `path`; nothing was changed.
    Declined { path: PathBuf },
}

impl SwapOutcome {
    pub fn is_swapped(&self) -> bool {
        matches!(self, SwapOutcome::Swapped { .. })
    }
}

/// Swap the names of two files.
///
/// Returns `Ok(true)` when swapped, `Ok(false)` when `overwrite` declined an
/// occupied destination (nothing changed), `Err` on any failure.
pub fn swap<F>(first: impl AsRef<Path>, second: impl AsRef<Path>, mut overwrite: F) -> Result<bool, SwapError>
where
    F: FnMut(&Path) -> bool,
{
    swap_file_names(first, second, &mut overwrite).map(|o| o.is_swapped())
}

/// Swap with default options, reporting the final paths.
pub fn swap_file_names(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    decision: &mut dyn OverwriteDecision,
) -> Result<SwapOutcome, SwapError> {
    swap_with_options(first, second, decision, &SwapOptions::default())
}

/// Full-control entry point.
pub fn swap_with_options(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    decision: &mut dyn OverwriteDecision,
    options: &SwapOptions,
) -> Result<SwapOutcome, SwapError> {
    let plan = SwapPlan::new(first, second)?;
    debug!(
        first = %plan.first.path().display(),
        second = %plan.second.path().display(),
        first_dest = %plan.first_dest.display(),
        second_dest = %plan.second_dest.display(),
        same_dir = plan.same_directory(),
        "planned swap"
    );

    if plan.is_noop() {
        info!(
            first = %plan.first.path().display(),
            second = %plan.second.path().display(),
            "Both files already share a name; nothing to swap"
        );
        return Ok(SwapOutcome::Swapped {
            first: plan.first_dest,
            second: plan.second_dest,
        });
    }

    // Ask about every conflict before deleting anything, so a later "no"
    // still leaves the filesystem untouched.
    let conflicts = plan.conflicts()?;
    for dest in &conflicts {
        if !decision.allow_overwrite(dest) {
            warn!(path = %dest.display(), "Overwrite declined; swap not performed");
            return Ok(SwapOutcome::Declined { path: dest.clone() });
        }
    }
    let removed = remove_approved(&conflicts)?;

    execute(&plan, options, &removed)?;

    info!(
        first = %plan.first.path().display(),
        second = %plan.second.path().display(),
        "Swapped file names"
    );
    Ok(SwapOutcome::Swapped {
        first: plan.first_dest,
        second: plan.second_dest,
    })
}

/// Tracks where each file currently is so a failure can be reported precisely.
struct Progress<'a> {
    plan: &'a SwapPlan,
    /// Current location of the first and second file.
    at: [PathBuf; 2],
    /// Completed renames, in order: (file index, from, to).
    done: Vec<(usize, PathBuf, PathBuf)>,
}

impl<'a> Progress<'a> {
    fn new(plan: &'a SwapPlan) -> Self {
        Self {
            plan,
            at: [plan.first.path().to_path_buf(), plan.second.path().to_path_buf()],
            done: Vec::new(),
        }
    }

    fn step(&mut self, file: usize, to: &Path) -> Result<(), SwapError> {
        let from = self.at[file].clone();
        rename_no_clobber(&from, to)?;
        self.at[file] = to.to_path_buf();
        self.done.push((file, from, to.to_path_buf()));
        Ok(())
    }

    /// Undo completed renames newest first; stops at the first failure.
    fn rollback(&mut self) -> bool {
        while let Some((file, from, to)) = self.done.pop() {
            if let Err(e) = rename_no_clobber(&to, &from) {
                error!(error = %e, path = %to.display(), "Rollback rename failed");
                return false;
            }
            self.at[file] = from;
        }
        true
    }

    fn stranded(&self) -> Vec<Stranded> {
        let temps = [&self.plan.first_temp, &self.plan.second_temp];
        let originals = [self.plan.first.path(), self.plan.second.path()];
        (0..2)
            .filter(|&i| self.at[i] == *temps[i])
            .map(|i| Stranded {
                current: self.at[i].clone(),
                original: originals[i].to_path_buf(),
            })
            .collect()
    }
}

/// Delete every approved destination. A failure after the first delete is an
/// incomplete swap: the earlier files cannot be brought back.
fn remove_approved(conflicts: &[PathBuf]) -> Result<Vec<PathBuf>, SwapError> {
    let mut removed: Vec<PathBuf> = Vec::with_capacity(conflicts.len());
    for dest in conflicts {
        if let Err(e) =
            fs::remove_file(dest).map_err(io_error_with_help("remove existing destination", dest))
        {
            if removed.is_empty() {
                return Err(e);
            }
            for p in &removed {
                error!(path = %p.display(), "Approved destination already removed");
            }
            return Err(SwapError::Incomplete {
                step: SwapStep::RemoveApproved,
                source: Box::new(e),
                removed,
                stranded: Vec::new(),
                rolled_back: false,
            });
        }
        info!(path = %dest.display(), "Removed existing destination (overwrite approved)");
        removed.push(dest.clone());
    }
    Ok(removed)
}

fn execute(plan: &SwapPlan, options: &SwapOptions, removed: &[PathBuf]) -> Result<(), SwapError> {
    let steps = [
        (SwapStep::FirstToTemp, 0, &plan.first_temp),
        (SwapStep::SecondToTemp, 1, &plan.second_temp),
        (SwapStep::FirstToFinal, 0, &plan.first_dest),
        (SwapStep::SecondToFinal, 1, &plan.second_dest),
    ];

    let mut progress = Progress::new(plan);
    for (step, file, to) in steps {
        if let Err(e) = progress.step(file, to) {
            if progress.done.is_empty() && removed.is_empty() {
                // Nothing renamed or deleted yet: a plain I/O failure.
                return Err(e);
            }
            let rolled_back =
                options.rollback_on_failure && !progress.done.is_empty() && progress.rollback();
            let stranded = progress.stranded();
            for s in &stranded {
                error!(
                    current = %s.current.display(),
                    original = %s.original.display(),
                    "File left under temporary name"
                );
            }
            return Err(SwapError::Incomplete {
                step,
                source: Box::new(e),
                removed: removed.to_vec(),
                stranded,
                rolled_back,
            });
        }
        debug!(%step, "swap step done");
    }
    Ok(())
}
