//! Infrastructure-level errors (config loading)

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading external configuration.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("config error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("config error: {0}")]
    Environment(#[source] config::ConfigError),

    #[error("cannot expand config path '{path}': {message}")]
    PathExpansion { path: String, message: String },
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
