//! Swap planning.
//! Decomposes both inputs, checks preconditions, and derives destinations,
//! temporary names and overwrite conflicts. Nothing here mutates the filesystem.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::SwapError;
use crate::platform::paths_equal;

use super::helpers::io_error_with_help;
use super::util::entry_exists;

/// Prefix of the transient names used while a swap is in flight.
pub const TEMP_PREFIX: &str = ".swap_names.";

const TEMP_NAME_ATTEMPTS: usize = 16;

/// A path split into its directory and base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePathRef {
    path: PathBuf,
    dir: PathBuf,
    name: OsString,
}

impl FilePathRef {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SwapError> {
        let path = path.into();
        let name = path
            .file_name()
            .ok_or_else(|| SwapError::MissingFileName(path.clone()))?
            .to_owned();
        // A bare "a.txt" has an empty parent; joining onto it keeps paths relative.
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { path, dir, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Same directory, different base name.
    pub fn sibling(&self, name: &OsStr) -> PathBuf {
        self.dir.join(name)
    }

    /// Directory used for identity comparisons ("" means the working directory).
    fn dir_for_compare(&self) -> PathBuf {
        let dir = if self.dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.dir.as_path()
        };
        dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
    }
}

/// Everything a swap needs, computed before the first rename.
#[derive(Debug, Clone)]
pub struct SwapPlan {
    pub first: FilePathRef,
    pub second: FilePathRef,
    /// dir(first) + name(second): where the first file ends up.
    pub first_dest: PathBuf,
    /// dir(second) + name(first): where the second file ends up.
    pub second_dest: PathBuf,
    pub first_temp: PathBuf,
    pub second_temp: PathBuf,
    same_dir: bool,
}

impl SwapPlan {
    /// Validate both inputs and derive the plan.
    ///
    /// Fails before touching anything if either path is missing, is not a
    /// regular file, or both name the same file.
    pub fn new(first: impl AsRef<Path>, second: impl AsRef<Path>) -> Result<Self, SwapError> {
        let first = FilePathRef::new(first.as_ref())?;
        let second = FilePathRef::new(second.as_ref())?;
        ensure_regular_file(first.path())?;
        ensure_regular_file(second.path())?;
        ensure_distinct(&first, &second)?;

        let same_dir = paths_equal(&first.dir_for_compare(), &second.dir_for_compare());
        let first_dest = first.sibling(second.name());
        let second_dest = second.sibling(first.name());

        let first_temp = unique_temp_path(first.dir(), None)?;
        let second_temp = unique_temp_path(second.dir(), Some(&first_temp))?;

        Ok(Self {
            first,
            second,
            first_dest,
            second_dest,
            first_temp,
            second_temp,
            same_dir,
        })
    }

    /// Both files live in the same directory (OS case rule).
    pub fn same_directory(&self) -> bool {
        self.same_dir
    }

    /// Byte-identical base names in different directories: swapping changes
    /// nothing. Names differing only in case still swap.
    pub fn is_noop(&self) -> bool {
        !self.same_dir && self.first.name() == self.second.name()
    }

    /// On a case-insensitive filesystem each destination of a case-only swap
    /// is the file's own current entry, not a conflict.
    fn case_only_rename(&self) -> bool {
        paths_equal(Path::new(self.first.name()), Path::new(self.second.name()))
    }

    /// Destinations already occupied by an unrelated file.
    ///
    /// Always empty in the same-directory case: the destinations there are the
    /// two original names, which the swap itself frees.
    pub fn conflicts(&self) -> Result<Vec<PathBuf>, SwapError> {
        if self.same_dir || self.is_noop() || self.case_only_rename() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for dest in [&self.first_dest, &self.second_dest] {
            match fs::symlink_metadata(dest) {
                Ok(meta) if meta.is_dir() => {
                    return Err(SwapError::DestinationIsDirectory(dest.clone()));
                }
                Ok(_) => out.push(dest.clone()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(io_error_with_help("inspect destination", dest)(e)),
            }
        }
        Ok(out)
    }
}

fn ensure_regular_file(path: &Path) -> Result<(), SwapError> {
    // symlink_metadata: a symlink is not a regular file and is refused, not followed.
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_file() => Ok(()),
        Ok(_) => Err(SwapError::NotRegularFile(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SwapError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(io_error_with_help("inspect", path)(e)),
    }
}

fn ensure_distinct(first: &FilePathRef, second: &FilePathRef) -> Result<(), SwapError> {
    let a = dunce::canonicalize(first.path()).unwrap_or_else(|_| first.path().to_path_buf());
    let b = dunce::canonicalize(second.path()).unwrap_or_else(|_| second.path().to_path_buf());
    if paths_equal(&a, &b) {
        return Err(SwapError::SamePath(first.path().to_path_buf()));
    }
    Ok(())
}

/// Random hidden name in `dir` that no existing entry (and not `taken`) uses.
fn unique_temp_path(dir: &Path, taken: Option<&Path>) -> Result<PathBuf, SwapError> {
    for _ in 0..TEMP_NAME_ATTEMPTS {
        let candidate = dir.join(format!("{TEMP_PREFIX}{}.tmp", Uuid::new_v4().simple()));
        if Some(candidate.as_path()) != taken && !entry_exists(&candidate) {
            return Ok(candidate);
        }
    }
    Err(io_error_with_help("pick temporary name in", dir)(io::Error::from(
        io::ErrorKind::AlreadyExists,
    )))
}
