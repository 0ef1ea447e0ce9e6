//! CLI error types.

use krand_core::{ConfigError, KRandError};
use thiserror::Error;

/// Errors surfaced by the `krand` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation request rejected by the library.
    #[error(transparent)]
    Generation(#[from] KRandError),

    /// Entropy configuration could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output stream could not be written.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument combination the library cannot express.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
