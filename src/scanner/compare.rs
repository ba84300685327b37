//! Byte-for-byte file comparison.
//!
//! Two files are identical iff they have the same length and the same byte
//! sequence. Length is checked first from metadata; only same-sized files are
//! read, in lockstep, a chunk at a time.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::CompareError;

/// Read buffer size for each side of a comparison.
pub const COMPARE_CHUNK_SIZE: usize = 64 * 1024;

/// Compare the full contents of two files.
///
/// Comparing a path with itself is trivially true and touches no files.
///
/// # Errors
///
/// Returns [`CompareError`] if either file can't be opened, stat'ed, or read.
///
/// # Example
///
/// ```no_run
/// use imgdedupe::scanner::files_identical;
/// use std::path::Path;
///
/// let same = files_identical(Path::new("IMG_0001.jpg"), Path::new("IMG_0001 (1).jpg"))?;
/// # Ok::<(), imgdedupe::scanner::CompareError>(())
/// ```
pub fn files_identical(a: &Path, b: &Path) -> Result<bool, CompareError> {
    if a == b {
        return Ok(true);
    }

    let len_a = fs::metadata(a).map_err(|e| CompareError::io(a, e))?.len();
    let len_b = fs::metadata(b).map_err(|e| CompareError::io(b, e))?.len();
    if len_a != len_b {
        log::trace!(
            "Size mismatch: {} ({} bytes) vs {} ({} bytes)",
            a.display(),
            len_a,
            b.display(),
            len_b
        );
        return Ok(false);
    }

    let mut reader_a = open(a)?;
    let mut reader_b = open(b)?;

    loop {
        let chunk_a = reader_a.fill_buf().map_err(|e| CompareError::io(a, e))?;
        let chunk_b = reader_b.fill_buf().map_err(|e| CompareError::io(b, e))?;

        if chunk_a.is_empty() && chunk_b.is_empty() {
            return Ok(true);
        }

        // One side hit EOF early: the file changed length after the stat.
        let n = chunk_a.len().min(chunk_b.len());
        if n == 0 || chunk_a[..n] != chunk_b[..n] {
            return Ok(false);
        }

        reader_a.consume(n);
        reader_b.consume(n);
    }
}

fn open(path: &Path) -> Result<BufReader<File>, CompareError> {
    let file = File::open(path).map_err(|e| CompareError::io(path, e))?;
    Ok(BufReader::with_capacity(COMPARE_CHUNK_SIZE, file))
}
