//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure maps to 1; scripts only distinguish success from failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) | CliError::Output(_) => crate::exitcode::FAILURE,
        }
    }
}
