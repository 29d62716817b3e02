//! Command-line interface definitions for `sobject-typings`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};

use crate::config::CliOverrides;

/// Parsed CLI arguments for `sobject-typings`.
#[derive(Debug, Parser)]
#[command(name = "sobject-typings")]
#[command(about = "Generate LWC type declarations from SObject describe metadata")]
#[command(version)]
pub struct Args {
    /// Project root containing the `.sfdx` folder.
    #[arg(long, value_name = "path")]
    pub project_root: Option<Utf8PathBuf>,
    /// Folder holding `standard.json` and `custom.json` describe payloads.
    #[arg(long, value_name = "path")]
    pub describe_dir: Option<Utf8PathBuf>,
    /// Output folder (defaults to `<project-root>/typings/lwc/sobjects`).
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Maximum number of objects written concurrently.
    #[arg(long, value_name = "count")]
    pub max_concurrency: Option<usize>,
    /// Configuration file to load instead of `sobject-typings.toml`.
    #[arg(long = "config", value_name = "path")]
    pub config_path: Option<Utf8PathBuf>,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the values supplied on the command line as a config layer.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides<'_> {
        CliOverrides {
            project_root: self.project_root.as_ref(),
            describe_dir: self.describe_dir.as_ref(),
            out_dir: self.out_dir.as_ref(),
            max_concurrency: self.max_concurrency,
        }
    }
}
