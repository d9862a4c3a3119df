//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the command-line interface.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument value was rejected before the scan started.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Interactive input could not be parsed as a number.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan itself failed.
    #[error(transparent)]
    Solver(#[from] solver_core::error::SolverError),

    /// JSON output could not be produced.
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("step must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: step must be positive");
    }

    #[test]
    fn test_solver_error_is_transparent() {
        let err: CliError = solver_core::error::SolverError::MaxIterationsExceeded {
            iterations: 100,
        }
        .into();
        assert_eq!(format!("{}", err), "Failed to converge after 100 iterations");
    }
}
