//! Command-line interface definitions for imgdedupe.
//!
//! # Example
//!
//! ```bash
//! # Report what would be removed in the current directory
//! imgdedupe --dry-run -v
//!
//! # Deduplicate a photo tree
//! imgdedupe -r ~/Pictures/Camera
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Deletes byte-identical copies of camera (`IMG_1234...`) and UUID named files.
///
/// Within each directory, files whose names start with `IMG_` and four
/// digits, or with a UUID, are grouped by identical content. The file with
/// the cleanest name in each group is kept and the rest are deleted.
#[derive(Debug, Parser)]
#[command(name = "imgdedupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The directory to search
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Do not actually delete any files
    #[arg(long)]
    pub dry_run: bool,

    /// Print keep/remove decisions (-vv also enables trace logging)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also deduplicate every subdirectory
    #[arg(short, long)]
    pub recursive: bool,

    /// Suppress log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files (environment variables still apply)
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Print errors as JSON on stderr
    #[arg(long, env = "IMGDEDUPE_JSON_ERRORS")]
    pub json_errors: bool,
}
