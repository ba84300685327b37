//! Directory driver: select, resolve, delete, and optionally descend.
//!
//! # Overview
//!
//! For each directory the [`Deduplicator`]:
//!
//! 1. reports the scan banner
//! 2. selects the candidate set
//! 3. repeatedly resolves the next duplicate group, reports the keeper and
//!    each removal (when reporting is on), deletes the removals (unless dry
//!    run), then drops every group member from the candidate set
//!
//! Subdirectories are handled after their parent, depth first, from an
//! explicit work-list. Reporting is always on below the root directory.
//!
//! The first filesystem failure aborts the run. Files already deleted stay
//! deleted.
//!
//! # Example
//!
//! ```no_run
//! use imgdedupe::dedupe::{DedupeOptions, Deduplicator};
//! use imgdedupe::report::ConsoleReporter;
//! use imgdedupe::scanner::NamePattern;
//! use std::path::Path;
//!
//! let options = DedupeOptions {
//!     dry_run: true,
//!     ..Default::default()
//! };
//! let mut dedupe = Deduplicator::new(
//!     NamePattern::camera_and_uuid(),
//!     options,
//!     ConsoleReporter::stdout(),
//! );
//! let summary = dedupe.run(Path::new("."))?;
//! println!("{} duplicate(s) found", summary.files_removed);
//! # Ok::<(), imgdedupe::dedupe::DedupeError>(())
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::actions::{remove_file, DeleteError};
use crate::duplicates::{next_batch, ResolveError};
use crate::report::Reporter;
use crate::scanner::{NamePattern, ScanError, Selector};

/// Flags controlling a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeOptions {
    /// Report keeper and removal decisions for the root directory.
    pub verbose: bool,
    /// Descend into subdirectories after the root.
    pub recursive: bool,
    /// Detect and report, but delete nothing.
    pub dry_run: bool,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories fully processed.
    pub directories_scanned: usize,
    /// Files that matched the name pattern.
    pub candidates: usize,
    /// Duplicate groups resolved, singletons included.
    pub groups: usize,
    /// Files removed, or that would have been in a dry run.
    pub files_removed: usize,
    /// Bytes freed by those removals.
    pub bytes_reclaimed: u64,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DedupeError {
    /// A directory or its entries could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A group could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A duplicate could not be deleted.
    #[error(transparent)]
    Delete(#[from] DeleteError),

    /// A decision could not be written to the console.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// A directory waiting to be processed.
#[derive(Debug)]
struct PendingDir {
    path: PathBuf,
    verbose: bool,
}

/// Drives selection, resolution, and deletion over a directory tree.
#[derive(Debug)]
pub struct Deduplicator<R: Reporter> {
    selector: Selector,
    options: DedupeOptions,
    reporter: R,
}

impl<R: Reporter> Deduplicator<R> {
    /// Create a deduplicator matching names against `pattern`.
    #[must_use]
    pub fn new(pattern: NamePattern, options: DedupeOptions, reporter: R) -> Self {
        Self {
            selector: Selector::new(pattern),
            options,
            reporter,
        }
    }

    /// Consume the deduplicator, returning its reporter.
    #[must_use]
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Process `root` and, if recursive, every directory below it.
    ///
    /// # Errors
    ///
    /// Returns the first [`DedupeError`] encountered; remaining candidates
    /// and pending directories are left untouched.
    pub fn run(&mut self, root: &Path) -> Result<RunSummary, DedupeError> {
        let mut summary = RunSummary {
            dry_run: self.options.dry_run,
            ..RunSummary::default()
        };

        let mut pending = vec![PendingDir {
            path: root.to_path_buf(),
            verbose: self.options.verbose,
        }];

        while let Some(dir) = pending.pop() {
            self.process_directory(&dir.path, dir.verbose, &mut summary)?;

            if self.options.recursive {
                let subdirs = self.selector.subdirectories(&dir.path)?;
                log::debug!(
                    "Queueing {} subdirectory(ies) of {}",
                    subdirs.len(),
                    dir.path.display()
                );
                // Reversed so the first subdirectory is popped first.
                pending.extend(subdirs.into_iter().rev().map(|path| PendingDir {
                    path,
                    verbose: true,
                }));
            }
        }

        Ok(summary)
    }

    /// Resolve every candidate in a single directory.
    fn process_directory(
        &mut self,
        dir: &Path,
        verbose: bool,
        summary: &mut RunSummary,
    ) -> Result<(), DedupeError> {
        self.reporter.on_scan_start(dir)?;

        let mut candidates = self.selector.select(dir)?;
        summary.candidates += candidates.len();

        while !candidates.is_empty() {
            let group = next_batch(&candidates)?;
            summary.groups += 1;

            if group.has_duplicates() {
                log::debug!(
                    "{} copy(ies) of {}",
                    group.removals().len(),
                    group.keeper().path.display()
                );
            }

            if verbose {
                self.reporter.on_keep(&group.keeper().path)?;
            }

            let mut freed = 0;
            for removal in group.removals() {
                if verbose {
                    self.reporter.on_remove(&removal.path)?;
                }
                if !self.options.dry_run {
                    freed += remove_file(&removal.path)?.size;
                }
            }

            summary.files_removed += group.removals().len();
            summary.bytes_reclaimed += if self.options.dry_run {
                group.reclaimable_bytes()
            } else {
                freed
            };

            candidates.retain(|c| !group.contains(&c.path));
        }

        summary.directories_scanned += 1;
        Ok(())
    }
}
