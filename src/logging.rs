//! Logging setup for imgdedupe.
//!
//! Diagnostics go through the `log` facade to an `env_logger` backend on
//! stderr. The level comes from, in priority order:
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. `--quiet` (errors only) or `-v` (debug) / `-vv` (trace)
//! 3. Default: info
//!
//! Scan and keep/remove reports are not log records; they are written to
//! stdout by [`crate::report`] regardless of level.

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logger from CLI verbosity flags.
///
/// # Panics
///
/// Panics if called more than once per process.
///
/// # Example
///
/// ```rust,no_run
/// use imgdedupe::logging::init_logging;
///
/// init_logging(1, false);
/// log::debug!("visible at -v");
/// ```
pub fn init_logging(verbose: u8, quiet: bool) {
    let use_env = env::var("RUST_LOG").is_ok();
    let level = determine_level(verbose, quiet);

    let mut builder = Builder::new();
    if use_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(level);
    }
    configure_format(&mut builder, verbose);
    builder.init();

    if use_env {
        log::debug!("Logging initialized from RUST_LOG");
    } else {
        log::debug!("Logging initialized at level: {:?}", level);
    }
}

/// Map CLI flags to a level filter.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Layout of each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// `LEVEL message`
    Compact,
    /// `<timestamp> LEVEL [module] message`, module only when requested.
    Timestamped { module_path: bool },
}

impl LogFormat {
    /// Debug builds stamp every line and name the module from -v up.
    fn for_build(verbose: u8) -> Self {
        if cfg!(debug_assertions) {
            Self::Timestamped {
                module_path: verbose >= 1,
            }
        } else {
            Self::Compact
        }
    }
}

fn configure_format(builder: &mut Builder, verbose: u8) {
    let format = LogFormat::for_build(verbose);
    builder.format(move |buf, record| {
        let level = record.level();
        let style = buf.default_level_style(level);
        match format {
            LogFormat::Compact => {
                writeln!(buf, "{style}{level:<5}{style:#} {}", record.args())
            }
            LogFormat::Timestamped { module_path } => {
                let timestamp = buf.timestamp_seconds();
                if module_path {
                    writeln!(
                        buf,
                        "{timestamp} {style}{level:<5}{style:#} [{}] {}",
                        record.module_path().unwrap_or("unknown"),
                        record.args()
                    )
                } else {
                    writeln!(buf, "{timestamp} {style}{level:<5}{style:#} {}", record.args())
                }
            }
        }
    });
}
