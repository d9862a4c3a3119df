//! Newton-Raphson refinement of a bracketed root.

use super::ScanConfig;
use crate::error::SolverError;
use crate::problem::Problem;
use num_traits::Float;

/// Derivative magnitude below which a Newton step is refused.
const DERIVATIVE_FLOOR: f64 = 1e-30;

/// Safeguarded Newton-Raphson iteration.
///
/// Uses Newton's method `x_{n+1} = x_n - f(x_n) / f'(x_n)` for quadratic
/// convergence on smooth functions, with two independent stopping criteria:
/// iteration continues while `|x_next - x_prev| >= eps_argument` AND
/// `|f(x_next)| >= eps_function`, and stops as soon as either measure
/// drops below its threshold.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Near a simple root the iteration converges quadratically, roughly
/// doubling the number of correct digits each step. It may fail if the
/// derivative is near zero or the starting point is far from a root; both
/// cases surface as a [`SolverError`] rather than a runaway loop.
///
/// # Example
///
/// ```
/// use solver_core::problem::ClosureProblem;
/// use solver_core::solvers::{NewtonSolver, ScanConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let mut problem = ClosureProblem::new(
///     |x: f64| x * x - 2.0,
///     |x| 2.0 * x,
///     |_| 2.0,
/// );
/// let solver = NewtonSolver::new(ScanConfig::default());
///
/// let solution = solver.solve(&mut problem, 1.0).unwrap();
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonSolver<T: Float> {
    /// Solver configuration
    config: ScanConfig<T>,
}

/// Outcome of one converged Newton solve.
///
/// Carries the root together with the diagnostics the iteration gathered
/// on the way: iteration count, the initial guess, displacement and step
/// measures, and an empirical convergence-order estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewtonSolution<T> {
    /// The converged root.
    pub root: T,

    /// Function value at the root.
    pub f_root: T,

    /// Number of Newton steps taken.
    pub iterations: usize,

    /// The starting point selected for the iteration.
    pub initial_guess: T,

    /// `|root - x0|`: total displacement from the initial guess.
    ///
    /// Reported as "accuracy by argument". Note this is a cumulative
    /// initial-to-final distance, not the terminal step size; see
    /// [`final_step`](Self::final_step) for the latter.
    pub accuracy_by_argument: T,

    /// `|x_next - x_prev|` at termination: the last step taken.
    pub final_step: T,

    /// Empirical convergence-order indicator
    /// `|x_next - x_prev| / |x_prev - x_prev_prev|²`.
    ///
    /// Computed from the three most recent iterates. When the iteration
    /// stops after a single step the denominator is zero and the estimate
    /// is infinite or NaN; callers display it as-is.
    pub convergence_order: T,
}

impl<T: Float> NewtonSolver<T> {
    /// Create a new Newton solver with the given configuration.
    ///
    /// Only the tolerances and the iteration cap of the configuration are
    /// used; the scan step width is irrelevant to a single solve.
    pub fn new(config: ScanConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Refine a root starting from `x0`.
    ///
    /// The first step `x1 = x0 - f(x0)/f'(x0)` establishes the first two
    /// iterates; further steps are taken while both stopping criteria
    /// still indicate non-convergence. The function is evaluated once per
    /// step and the value reused for the stopping test and the next
    /// update.
    ///
    /// # Arguments
    ///
    /// * `problem` - Target function with derivatives
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(solution)` - `|x_next - x_prev| < eps_argument` or
    ///   `|f(x_next)| < eps_function` holds
    /// * `Err(SolverError::MaxIterationsExceeded)` - Iteration cap reached
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] when the iteration fails to converge, as
    /// detailed above.
    pub fn solve<P>(&self, problem: &mut P, x0: T) -> Result<NewtonSolution<T>, SolverError>
    where
        P: Problem<T>,
    {
        let floor = T::from(DERIVATIVE_FLOOR).unwrap();

        let fx0 = problem.f(x0);
        let dx0 = problem.df(x0);
        if dx0.abs() < floor {
            return Err(SolverError::DerivativeNearZero {
                x: x0.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Three-iterate working set: x_next is the newest value.
        let mut x_prev_prev = x0;
        let mut x_prev = x0;
        let mut x_next = x0 - fx0 / dx0;
        let mut iterations = 1;

        if !x_next.is_finite() {
            return Err(SolverError::NumericalInstability(
                "Newton iteration produced non-finite value".to_string(),
            ));
        }

        let mut f_next = problem.f(x_next);

        while (x_next - x_prev).abs() >= self.config.eps_argument
            && f_next.abs() >= self.config.eps_function
        {
            if iterations >= self.config.max_iterations {
                return Err(SolverError::MaxIterationsExceeded { iterations });
            }

            x_prev_prev = x_prev;
            x_prev = x_next;
            let f_prev = f_next;

            let d_prev = problem.df(x_prev);
            if d_prev.abs() < floor {
                return Err(SolverError::DerivativeNearZero {
                    x: x_prev.to_f64().unwrap_or(f64::NAN),
                });
            }

            x_next = x_prev - f_prev / d_prev;
            if !x_next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            f_next = problem.f(x_next);
            iterations += 1;
        }

        let base = (x_prev - x_prev_prev).abs();
        let convergence_order = ((x_next - x_prev) / (base * base)).abs();

        Ok(NewtonSolution {
            root: x_next,
            f_root: f_next,
            iterations,
            initial_guess: x0,
            accuracy_by_argument: (x_next - x0).abs(),
            final_step: (x_next - x_prev).abs(),
            convergence_order,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &ScanConfig<T> {
        &self.config
    }
}
