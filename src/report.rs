//! Console reporting of scan and keep/remove decisions.
//!
//! The [`Reporter`] trait receives one call per directory entered and, when
//! reporting is enabled for that directory, one call per keeper and per
//! removal. [`ConsoleReporter`] renders these as:
//!
//! ```text
//! Scanning <dir> for duplicates...
//! Keeping <path>!
//! Removing <path>...
//! ```
//!
//! Output goes to any [`Write`] sink, stdout in the binary and a `Vec<u8>` in
//! tests.

use std::io::{self, Write};
use std::path::Path;

/// Receives dedupe decisions as they are made.
pub trait Reporter {
    /// Called once for every directory entered, before it is listed.
    ///
    /// # Errors
    ///
    /// Returns an error if the report can't be written.
    fn on_scan_start(&mut self, dir: &Path) -> io::Result<()>;

    /// Called once per resolved group with the surviving file.
    ///
    /// # Errors
    ///
    /// Returns an error if the report can't be written.
    fn on_keep(&mut self, path: &Path) -> io::Result<()>;

    /// Called for each file slated for deletion, before it is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the report can't be written.
    fn on_remove(&mut self, path: &Path) -> io::Result<()>;
}

/// Line-oriented reporter writing to a [`Write`] sink.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter over `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_scan_start(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(self.out, "Scanning {} for duplicates...", dir.display())
    }

    fn on_keep(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Keeping {}!", path.display())
    }

    fn on_remove(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Removing {}...", path.display())?;
        // Visible before the deletion attempt.
        self.out.flush()
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_scan_start(&mut self, dir: &Path) -> io::Result<()> {
        (**self).on_scan_start(dir)
    }

    fn on_keep(&mut self, path: &Path) -> io::Result<()> {
        (**self).on_keep(path)
    }

    fn on_remove(&mut self, path: &Path) -> io::Result<()> {
        (**self).on_remove(path)
    }
}
