//! Duplicate detection module.
//!
//! This module provides:
//! - Duplicate groups with deterministic keeper ordering
//! - Batch resolution of a directory's candidate set

pub mod groups;
pub mod resolver;

pub use groups::{keeper_order, sort_key, DuplicateGroup};
pub use resolver::{next_batch, ResolveError};
