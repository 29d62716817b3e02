//! Error types for `sobject-typings`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the typings pipeline.
#[derive(Debug, Error)]
pub enum TypingsError {
    /// A filesystem operation failed for the given path.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation targeted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A describe payload could not be parsed.
    #[error("failed to parse describe JSON at {path}: {source}")]
    DescribeJson {
        /// Describe file that failed to parse.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration layers could not be merged or extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    MissingConfig(Utf8PathBuf),

    /// The concurrency limit resolved to zero.
    #[error("max_concurrency must be greater than zero")]
    InvalidConcurrency,

    /// A blocking typing task panicked or was cancelled.
    #[error("typing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl TypingsError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
