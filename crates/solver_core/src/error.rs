//! Error types for structured error handling.

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for scanning and Newton iteration
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Newton failed to converge within the iteration limit
/// - `DerivativeNearZero`: Derivative too small for a Newton step
/// - `NumericalInstability`: Iterate became non-finite
/// - `InvalidInterval`: Scan interval or configuration rejected
///
/// # Examples
/// ```
/// use solver_core::error::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in the Newton update).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where the derivative was near zero
        x: f64,
    },

    /// Numerical instability during iteration.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Scan interval has its bounds out of order or non-finite.
    #[error("Invalid interval: [{a}, {b}]")]
    InvalidInterval {
        /// Lower interval bound
        a: f64,
        /// Upper interval bound
        b: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 100 iterations"
        );
    }

    #[test]
    fn test_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero { x: 1.5 };
        assert_eq!(format!("{}", err), "Derivative near zero at x = 1.5");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = SolverError::NumericalInstability("non-finite iterate".to_string());
        assert_eq!(
            format!("{}", err),
            "Numerical instability: non-finite iterate"
        );
    }

    #[test]
    fn test_invalid_interval_display() {
        let err = SolverError::InvalidInterval { a: 10.0, b: 0.0 };
        assert_eq!(format!("{}", err), "Invalid interval: [10, 0]");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::DerivativeNearZero { x: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
