//! # CLI Error Type
//!
//! Unified error type for the terminal front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in WeSplit                                │
//! │                                                                         │
//! │  ValidationError (core) ──┐                                             │
//! │  ConfigError (config.rs) ─┼──► CliError ──► stderr message + exit code  │
//! │  io / serde_json ─────────┘                                             │
//! │                                                                         │
//! │  Interactive mode never exits on a ValidationError: the message is      │
//! │  printed and the previous input is kept.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use thiserror::Error;
use wesplit_core::ValidationError;

use crate::config::ConfigError;

/// Errors that end a `wesplit` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value was outside its input domain.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A `WESPLIT_*` environment value was unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON report could not be written.
    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// | 1    | I/O or output failure   |
    /// | 2    | Invalid input           |
    /// | 3    | Invalid configuration   |
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Validation(_) => ExitCode::from(2),
            CliError::Config(_) => ExitCode::from(3),
            CliError::Io(_) | CliError::Json(_) => ExitCode::from(1),
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_cli_error() {
        let err: CliError = ValidationError::Negative {
            field: "check amount".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "check amount must not be negative");
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn test_config_error_message() {
        let err: CliError = ConfigError::InvalidValue {
            key: "WESPLIT_DEFAULT_TIP".to_string(),
            reason: "'lots' is not a whole number".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "configuration error: Invalid value for WESPLIT_DEFAULT_TIP: 'lots' is not a whole number"
        );
        assert_eq!(err.exit_code(), ExitCode::from(3));
    }
}
