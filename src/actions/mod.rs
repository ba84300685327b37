//! File actions module.
//!
//! Deletion is the only action: removals are unlinked permanently. Dry runs
//! skip this module entirely.

pub mod delete;

pub use delete::{remove_file, DeleteError, DeleteResult};
