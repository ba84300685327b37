//! Scanner module for candidate selection and content comparison.
//!
//! This module provides:
//! - [`pattern`]: the immutable filename pattern
//! - [`selector`]: single-directory listing filtered down to candidates
//! - [`compare`]: full-content byte comparison between two files
//!
//! # Example
//!
//! ```no_run
//! use imgdedupe::scanner::{files_identical, NamePattern, Selector};
//! use std::path::Path;
//!
//! let selector = Selector::new(NamePattern::camera_and_uuid());
//! let files = selector.select(Path::new("."))?;
//! if let [first, second, ..] = files.as_slice() {
//!     println!("identical: {}", files_identical(&first.path, &second.path)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compare;
pub mod pattern;
pub mod selector;

use std::io;
use std::path::{Path, PathBuf};

pub use compare::files_identical;
pub use pattern::NamePattern;
pub use selector::Selector;

/// A candidate file found by the [`Selector`].
///
/// Only lives for the processing of the directory it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name within its directory
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes at selection time
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(name: String, path: PathBuf, size: u64) -> Self {
        Self { name, path, size }
    }
}

/// Errors that can occur while listing a directory.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while accessing `path`.
    #[must_use]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Errors that can occur while comparing file contents.
#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    /// A file could not be opened, stat'ed, or read.
    #[error("Failed to read {path} for comparison: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file that could not be read.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}
