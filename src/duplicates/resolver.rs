//! Batch resolution of the candidate set.
//!
//! Each call to [`next_batch`] takes the first candidate as the seed, gathers
//! every candidate byte-identical to it (the seed included), and returns them
//! as a [`DuplicateGroup`]. Nothing is mutated; the caller removes the group's
//! members from its candidate set before asking for the next batch.

use thiserror::Error;

use super::DuplicateGroup;
use crate::scanner::{files_identical, CompareError, FileEntry};

/// Error type for batch resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Resolution was requested on an empty candidate set.
    #[error("no candidates left to resolve")]
    EmptyCandidateSet,

    /// A candidate could not be read during comparison.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Resolve the next duplicate group from `candidates`.
///
/// Sizes recorded at selection time reject mismatches without opening files;
/// same-sized candidates are compared in full against the seed.
///
/// # Errors
///
/// - `EmptyCandidateSet` if `candidates` is empty
/// - `Compare` if a file can't be read
///
/// # Example
///
/// ```no_run
/// use imgdedupe::duplicates::next_batch;
/// use imgdedupe::scanner::{NamePattern, Selector};
/// use std::path::Path;
///
/// let selector = Selector::new(NamePattern::camera_and_uuid());
/// let candidates = selector.select(Path::new("."))?;
/// if !candidates.is_empty() {
///     let group = next_batch(&candidates)?;
///     println!("keep {}", group.keeper().path.display());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn next_batch(candidates: &[FileEntry]) -> Result<DuplicateGroup, ResolveError> {
    let seed = candidates.first().ok_or(ResolveError::EmptyCandidateSet)?;

    let mut members = Vec::new();
    for candidate in candidates {
        if candidate.size == seed.size && files_identical(&seed.path, &candidate.path)? {
            members.push(candidate.clone());
        }
    }

    log::debug!(
        "Resolved group of {} for seed {}",
        members.len(),
        seed.path.display()
    );

    // The seed always matches itself, so the group is never empty.
    DuplicateGroup::new(members).ok_or(ResolveError::EmptyCandidateSet)
}
