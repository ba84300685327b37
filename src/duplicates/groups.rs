//! Duplicate groups and keeper ordering.
//!
//! # Overview
//!
//! A [`DuplicateGroup`] holds files that are all byte-identical. Members are
//! ordered by [`sort_key`] (the name without its final extension), ties broken
//! by the full name, and the first member is the keeper. This makes
//! `IMG_1234.jpg` win over `IMG_1234 (1).jpg`.
//!
//! # Example
//!
//! ```
//! use imgdedupe::duplicates::DuplicateGroup;
//! use imgdedupe::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let entry = |name: &str| FileEntry::new(name.to_string(), PathBuf::from(name), 3);
//! let group = DuplicateGroup::new(vec![
//!     entry("IMG_1234 (1).jpg"),
//!     entry("IMG_1234.jpg"),
//! ])
//! .unwrap();
//!
//! assert_eq!(group.keeper().name, "IMG_1234.jpg");
//! assert_eq!(group.removals().len(), 1);
//! ```

use std::cmp::Ordering;
use std::path::Path;

use crate::scanner::FileEntry;

/// Ordering key for keeper selection: `name` with its final extension removed.
///
/// Names without a `.` are their own key.
///
/// ```
/// use imgdedupe::duplicates::sort_key;
///
/// assert_eq!(sort_key("IMG_1234.jpg"), "IMG_1234");
/// assert_eq!(sort_key("IMG_1234.tar.gz"), "IMG_1234.tar");
/// assert_eq!(sort_key("IMG_1234"), "IMG_1234");
/// ```
#[must_use]
pub fn sort_key(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

/// Compare two names by [`sort_key`], then by full name.
#[must_use]
pub fn keeper_order(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(sort_key(b)).then_with(|| a.cmp(b))
}

/// A non-empty, ordered group of byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Members in keeper order; never empty.
    files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Build a group from its members, ordering them for keeper selection.
    ///
    /// Returns `None` if `files` is empty.
    #[must_use]
    pub fn new(mut files: Vec<FileEntry>) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        files.sort_by(|a, b| keeper_order(&a.name, &b.name));
        Some(Self { files })
    }

    /// The member that survives.
    #[must_use]
    pub fn keeper(&self) -> &FileEntry {
        &self.files[0]
    }

    /// Members to delete, in keeper order.
    #[must_use]
    pub fn removals(&self) -> &[FileEntry] {
        &self.files[1..]
    }

    /// All members, keeper first.
    #[must_use]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Whether the group has anything to remove.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.files.len() > 1
    }

    /// Check whether `path` belongs to this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// Bytes freed by removing every member but the keeper.
    #[must_use]
    pub fn reclaimable_bytes(&self) -> u64 {
        self.removals().iter().map(|f| f.size).sum()
    }
}
