//! Scan and solver configuration types.

use num_traits::Float;

/// Configuration for the interval scan and the Newton refinement.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use solver_core::solvers::ScanConfig;
///
/// // Use default configuration
/// let config: ScanConfig<f64> = ScanConfig::default();
/// assert!(config.step > 0.0);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = ScanConfig {
///     step: 0.5,
///     eps_argument: 1e-8,
///     eps_function: 1e-8,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig<T: Float> {
    /// Width of each scan sub-interval.
    ///
    /// The interval `[a, b]` is partitioned into consecutive sub-intervals
    /// of this width; the final one is clipped to end exactly at `b`. The
    /// default of `7.0` is deliberately coarse; a smaller step finds more
    /// closely spaced roots at the cost of more function evaluations.
    pub step: T,

    /// Argument-space convergence tolerance (`eps1`).
    ///
    /// Newton iterates while `|x_next - x_prev| >= eps_argument` and the
    /// function-space criterion also indicates non-convergence.
    pub eps_argument: T,

    /// Function-space convergence tolerance (`eps2`).
    ///
    /// Newton iterates while `|f(x_next)| >= eps_function` and the
    /// argument-space criterion also indicates non-convergence.
    pub eps_function: T,

    /// Maximum number of Newton iterations per bracket.
    ///
    /// If a solve does not converge within this limit it returns
    /// `SolverError::MaxIterationsExceeded` instead of looping forever.
    pub max_iterations: usize,
}

impl<T: Float> Default for ScanConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `step`: 7.0
    /// - `eps_argument`: 1e-5
    /// - `eps_function`: 1e-5
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            step: T::from(7.0).unwrap(),
            eps_argument: T::from(1e-5).unwrap(),
            eps_function: T::from(1e-5).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> ScanConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `step` - Scan sub-interval width (must be positive)
    /// * `eps_argument` - Argument-space tolerance (must be positive)
    /// * `eps_function` - Function-space tolerance (must be positive)
    /// * `max_iterations` - Maximum Newton iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if any tolerance or the step is not positive, or if
    /// `max_iterations` is zero.
    pub fn new(step: T, eps_argument: T, eps_function: T, max_iterations: usize) -> Self {
        assert!(step > T::zero(), "step must be positive");
        assert!(eps_argument > T::zero(), "eps_argument must be positive");
        assert!(eps_function > T::zero(), "eps_function must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            step,
            eps_argument,
            eps_function,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerances (1e-12) and more iterations (500) for cases
    /// requiring extreme precision. Keeps the default step width.
    pub fn high_precision() -> Self {
        Self {
            step: T::from(7.0).unwrap(),
            eps_argument: T::from(1e-12).unwrap(),
            eps_function: T::from(1e-12).unwrap(),
            max_iterations: 500,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerances (1e-3) and fewer iterations (50) for cases
    /// where speed is more important than precision.
    pub fn fast() -> Self {
        Self {
            step: T::from(7.0).unwrap(),
            eps_argument: T::from(1e-3).unwrap(),
            eps_function: T::from(1e-3).unwrap(),
            max_iterations: 50,
        }
    }

    /// Return a copy of this configuration with a different step width.
    pub fn with_step(mut self, step: T) -> Self {
        assert!(step > T::zero(), "step must be positive");
        self.step = step;
        self
    }
}
