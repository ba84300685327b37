//! Layered application configuration.
//!
//! Settings are merged in increasing priority:
//!
//! 1. built-in defaults (everything off)
//! 2. TOML config file (`<config dir>/imgdedupe/config.toml`, or `--config`)
//! 3. `IMGDEDUPE_*` environment variables (e.g. `IMGDEDUPE_DRY_RUN=true`)
//! 4. CLI flags, which can only switch a setting on
//!
//! ```toml
//! dry_run = true
//! recursive = false
//! verbose = true
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;
use crate::dedupe::DedupeOptions;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "IMGDEDUPE_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The file or environment held an unknown key or a value of the wrong type.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Never delete; only report.
    pub dry_run: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Report keep/remove decisions.
    pub verbose: bool,
}

impl Config {
    /// Load from the default config file location plus environment.
    ///
    /// A missing default file contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if the file or environment can't be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if let Some(path) = path.as_deref().filter(|p| !p.is_file()) {
            log::debug!("No config file at {}, using defaults", path.display());
        }
        Self::extract(path.as_deref())
    }

    /// Load from `path` plus environment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `path` doesn't exist
    /// - `Invalid` if the file or environment can't be parsed
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::extract(Some(path))
    }

    /// Load from defaults plus environment, skipping any file.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if an environment value can't be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::extract(None)
    }

    /// Resolve the configuration selected by the CLI flags, then apply them.
    ///
    /// # Errors
    ///
    /// Propagates errors from the selected config file or the environment.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = if cli.no_config {
            Self::from_env()?
        } else if let Some(path) = &cli.config {
            Self::load_from_path(path)?
        } else {
            Self::load()?
        };
        Ok(config.with_cli_overrides(cli))
    }

    /// Switch on every setting enabled by a CLI flag.
    #[must_use]
    pub fn with_cli_overrides(self, cli: &Cli) -> Self {
        Self {
            dry_run: self.dry_run || cli.dry_run,
            recursive: self.recursive || cli.recursive,
            verbose: self.verbose || cli.verbose > 0,
        }
    }

    /// Default platform-specific config file path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "imgdedupe", "imgdedupe").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn extract(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            log::debug!("Reading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).only(&["dry_run", "recursive", "verbose"]))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }
}

impl From<Config> for DedupeOptions {
    fn from(config: Config) -> Self {
        Self {
            verbose: config.verbose,
            recursive: config.recursive,
            dry_run: config.dry_run,
        }
    }
}
