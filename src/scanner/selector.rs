//! Candidate selection for a single directory.
//!
//! # Overview
//!
//! The [`Selector`] lists the direct entries of one directory (no descent)
//! and keeps the regular files whose names match its [`NamePattern`].
//! Symlinks are never followed, so a link to a matching file is not a
//! candidate. Entries come back sorted by file name, which makes the batch
//! seed order reproducible between runs.
//!
//! # Example
//!
//! ```no_run
//! use imgdedupe::scanner::{NamePattern, Selector};
//! use std::path::Path;
//!
//! let selector = Selector::new(NamePattern::camera_and_uuid());
//! for file in selector.select(Path::new("."))? {
//!     println!("{}: {} bytes", file.path.display(), file.size);
//! }
//! # Ok::<(), imgdedupe::scanner::ScanError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileEntry, NamePattern, ScanError};

/// Filters a directory listing down to pattern-matching regular files.
#[derive(Debug, Clone)]
pub struct Selector {
    pattern: NamePattern,
}

impl Selector {
    /// Create a selector that keeps files matching `pattern`.
    #[must_use]
    pub fn new(pattern: NamePattern) -> Self {
        Self { pattern }
    }

    /// Produce the candidate set for `dir`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `dir` doesn't exist
    /// - `NotADirectory` if `dir` is not a directory
    /// - `PermissionDenied` / `Io` if the listing or an entry's metadata
    ///   can't be read
    pub fn select(&self, dir: &Path) -> Result<Vec<FileEntry>, ScanError> {
        let mut candidates = Vec::new();

        for entry in list_dir(dir)? {
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-regular entry: {}", entry.path().display());
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                log::trace!("Skipping non-UTF-8 name: {}", entry.path().display());
                continue;
            };

            if !self.pattern.matches(name) {
                log::trace!("Skipping non-matching name: {}", name);
                continue;
            }

            let metadata = entry.metadata().map_err(|e| walk_error(dir, e))?;
            candidates.push(FileEntry::new(
                name.to_string(),
                entry.path().to_path_buf(),
                metadata.len(),
            ));
        }

        log::debug!(
            "Selected {} candidate(s) in {}",
            candidates.len(),
            dir.display()
        );

        Ok(candidates)
    }

    /// List the direct subdirectories of `dir`, sorted by name.
    ///
    /// Symlinks to directories are not included.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Selector::select`].
    pub fn subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        Ok(list_dir(dir)?
            .into_iter()
            .filter(|entry| entry.file_type().is_dir())
            .map(DirEntry::into_path)
            .collect())
    }
}

/// Direct entries of `dir`, sorted by file name.
fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    let metadata = fs::metadata(dir).map_err(|e| ScanError::from_io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| walk_error(dir, e)))
        .collect()
}

fn walk_error(dir: &Path, error: walkdir::Error) -> ScanError {
    let path = error.path().unwrap_or(dir).to_path_buf();
    match error.into_io_error() {
        Some(source) => ScanError::from_io(&path, source),
        None => ScanError::Io {
            path,
            source: std::io::Error::other("filesystem loop detected"),
        },
    }
}
