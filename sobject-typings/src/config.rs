//! Layered configuration for `sobject-typings`.
//!
//! Values are merged in increasing precedence: built-in defaults, the TOML
//! configuration file, `SOBJECT_TYPINGS_*` environment variables, then
//! command-line flags.

use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::TypingsError;
use crate::typing::{DEFAULT_MAX_CONCURRENCY, typings_folder};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SOBJECT_TYPINGS_";

/// Configuration file read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "sobject-typings.toml";

/// Describe folder relative to the project root.
pub const DEFAULT_DESCRIBE_DIR: [&str; 4] = [".sfdx", "tools", "sobjects", "describe"];

/// Resolved generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingsConfig {
    /// Project root containing the `.sfdx` folder.
    pub project_root: Utf8PathBuf,
    /// Explicit describe folder; derived from `project_root` when unset.
    pub describe_dir: Option<Utf8PathBuf>,
    /// Explicit output folder; derived from `project_root` when unset.
    pub out_dir: Option<Utf8PathBuf>,
    /// Maximum number of objects written concurrently.
    pub max_concurrency: usize,
}

impl Default for TypingsConfig {
    fn default() -> Self {
        Self {
            project_root: Utf8PathBuf::from("."),
            describe_dir: None,
            out_dir: None,
            max_concurrency: DEFAULT_MAX_CONCURRENCY.get(),
        }
    }
}

impl TypingsConfig {
    /// Returns the folder describe payloads are read from.
    #[must_use]
    pub fn describe_dir(&self) -> Utf8PathBuf {
        self.describe_dir.clone().unwrap_or_else(|| {
            DEFAULT_DESCRIBE_DIR
                .iter()
                .fold(self.project_root.clone(), |path, segment| path.join(segment))
        })
    }

    /// Returns the folder typings are written to.
    #[must_use]
    pub fn out_dir(&self) -> Utf8PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| typings_folder(&self.project_root))
    }

    /// Returns the concurrency limit.
    ///
    /// # Errors
    ///
    /// Returns `TypingsError::InvalidConcurrency` when the limit is zero.
    pub fn max_concurrency(&self) -> Result<NonZeroUsize, TypingsError> {
        NonZeroUsize::new(self.max_concurrency).ok_or(TypingsError::InvalidConcurrency)
    }
}

/// Command-line layer; unset flags leave lower layers untouched.
#[derive(Debug, Default, Serialize)]
pub struct CliOverrides<'a> {
    /// `--project-root`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<&'a Utf8PathBuf>,
    /// `--describe-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe_dir: Option<&'a Utf8PathBuf>,
    /// `--out-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<&'a Utf8PathBuf>,
    /// `--max-concurrency`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
}

/// Merges all configuration layers.
///
/// `config_path` names a file that must exist; without it,
/// [`DEFAULT_CONFIG_FILE`] is read when present.
///
/// # Errors
///
/// Returns `TypingsError::MissingConfig` when `config_path` does not exist,
/// `TypingsError::Config` when a layer fails to parse, and
/// `TypingsError::InvalidConcurrency` when the limit resolves to zero.
pub fn load_config(
    config_path: Option<&Utf8Path>,
    overrides: &CliOverrides<'_>,
) -> Result<TypingsConfig, TypingsError> {
    let file = match config_path {
        Some(path) if !path.is_file() => return Err(TypingsError::MissingConfig(path.to_path_buf())),
        Some(path) => path,
        None => Utf8Path::new(DEFAULT_CONFIG_FILE),
    };
    tracing::debug!(path = %file, "loading configuration");

    let config: TypingsConfig = Figment::from(Serialized::defaults(TypingsConfig::default()))
        .merge(Toml::file_exact(file.as_std_path()))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(Box::new)?;

    config.max_concurrency()?;
    Ok(config)
}
