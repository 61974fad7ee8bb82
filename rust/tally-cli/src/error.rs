//! Errors reported by the `tally` command line.

use std::path::PathBuf;
use tally_core::FrequencyError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A value token could not be parsed as the requested number type.
    #[error("invalid number '{token}': {reason}")]
    InvalidNumber { token: String, reason: String },

    #[error("invalid query '{token}': expected a single character")]
    InvalidQuery { token: String },

    #[error("no input values given (pass values as arguments or use --file)")]
    NoInput,

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `tracing_subscriber::EnvFilter` directive from config or `RUST_LOG`
    /// did not parse.
    #[error("invalid log filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },

    #[error("'{}' already exists", path.display())]
    ConfigExists { path: PathBuf },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Frequency(#[from] FrequencyError),
}
