//! Fixed-step interval scanning for sign-change brackets.

use super::{NewtonSolver, ScanConfig};
use crate::error::SolverError;
use crate::problem::Problem;
use crate::report::RootReport;
use num_traits::Float;
use std::time::Instant;

/// A sub-interval whose endpoints give function values of opposite sign
/// (or an exact zero), guaranteeing a root within by the intermediate
/// value theorem.
///
/// Created transiently by the scan and consumed immediately by the Newton
/// stage; the endpoint function values are kept so the initial-guess
/// selection needs no re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bracket<T> {
    /// Left endpoint.
    pub lo: T,
    /// Right endpoint.
    pub hi: T,
    /// Function value at the left endpoint.
    pub f_lo: T,
    /// Function value at the right endpoint.
    pub f_hi: T,
}

/// One detected bracket together with the outcome of its Newton solve.
///
/// A failed solve does not abort the scan; the remaining sub-intervals are
/// still searched, so callers get a result per bracket rather than a
/// single all-or-nothing error.
#[derive(Debug, Clone)]
pub struct BracketSolve<T> {
    /// The bracket the scan detected.
    pub bracket: Bracket<T>,
    /// The converged root report, or the reason the solve failed.
    pub outcome: Result<RootReport<T>, SolverError>,
}

/// Scans an interval in fixed-width steps and refines each sign-change
/// bracket with Newton-Raphson.
///
/// # Algorithm
///
/// The interval `[a, b]` is partitioned into consecutive sub-intervals of
/// width [`ScanConfig::step`], the final one clipped to end exactly at
/// `b`. The function is evaluated once per boundary: the right endpoint's
/// value becomes the next sub-interval's left value. A bracket is detected
/// when `f(x) · f(x2) <= 0` and is handed to the Newton stage before
/// scanning resumes.
///
/// The Newton starting point is chosen by the Fourier condition: when
/// `f(x) · f''(x) > 0` at the left endpoint (function value and curvature
/// agree in sign, guaranteeing monotone convergence from that side), the
/// iteration starts at `x`; otherwise at `x2`.
///
/// # Example
///
/// ```
/// use solver_core::problem::QuadraticExp;
/// use solver_core::solvers::{RootScanner, ScanConfig};
///
/// let mut problem = QuadraticExp::new();
/// let scanner: RootScanner<f64> = RootScanner::new(ScanConfig::default());
///
/// let solves = scanner.scan(&mut problem, 0.0, 10.0).unwrap();
/// assert_eq!(solves.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RootScanner<T: Float> {
    /// Scan and solver configuration
    config: ScanConfig<T>,
}

impl<T: Float> RootScanner<T> {
    /// Create a new scanner with the given configuration.
    pub fn new(config: ScanConfig<T>) -> Self {
        Self { config }
    }

    /// Create a scanner with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Scan `[a, b]` and solve every detected bracket.
    ///
    /// Returns one [`BracketSolve`] per detected sign change, in scan
    /// order. Each report carries the cumulative evaluation count at the
    /// time it was produced and the wall-clock time since the previous
    /// report (or since the scan started, for the first bracket) — the
    /// timer restarts after each report, mirroring how the diagnostics are
    /// meant to be read bracket by bracket.
    ///
    /// A degenerate zero-width interval (`a == b`) runs the loop body at
    /// most once and yields a single bracket only when `f(a)` is exactly
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInterval`] when `a > b` or either
    /// bound is non-finite. Per-bracket solver failures are reported in
    /// the corresponding [`BracketSolve::outcome`] instead.
    pub fn scan<P>(&self, problem: &mut P, a: T, b: T) -> Result<Vec<BracketSolve<T>>, SolverError>
    where
        P: Problem<T>,
    {
        if a > b || !a.is_finite() || !b.is_finite() {
            return Err(SolverError::InvalidInterval {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let newton = NewtonSolver::new(self.config);
        let mut solves = Vec::new();

        let mut f_left = problem.f(a);
        let mut x = a;
        let mut timer = Instant::now();

        while x <= b {
            let x2 = (x + self.config.step).min(b);
            let f_right = problem.f(x2);

            if f_left * f_right <= T::zero() {
                let bracket = Bracket {
                    lo: x,
                    hi: x2,
                    f_lo: f_left,
                    f_hi: f_right,
                };

                // Fourier condition: start where f and f'' agree in sign.
                let curvature = problem.d2f(x);
                let x0 = if f_left * curvature > T::zero() { x } else { x2 };

                let outcome = newton.solve(problem, x0).map(|solution| {
                    RootReport::new(solution, problem.evaluations(), timer.elapsed())
                });

                solves.push(BracketSolve { bracket, outcome });
                timer = Instant::now();
            }

            f_left = f_right;
            x = x + self.config.step;
        }

        Ok(solves)
    }

    /// Returns a reference to the scanner configuration.
    pub fn config(&self) -> &ScanConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ClosureProblem, QuadraticExp};

    #[test]
    fn test_default_scenario() {
        // a = 0, b = 10, h = 7, eps1 = eps2 = 1e-5: one bracket in [0, 7].
        let scanner: RootScanner<f64> = RootScanner::with_defaults();
        let mut problem = QuadraticExp::new();

        let solves = scanner.scan(&mut problem, 0.0, 10.0).unwrap();
        assert_eq!(solves.len(), 1);

        let bracket = solves[0].bracket;
        assert_eq!(bracket.lo, 0.0);
        assert_eq!(bracket.hi, 7.0);
        assert!(bracket.f_lo < 0.0 && bracket.f_hi > 0.0);

        let report = solves[0].outcome.as_ref().unwrap();
        assert!((report.root - 4.462).abs() < 1e-2);
        assert!(report.f_root.abs() < 1e-5);
        assert!(report.iterations < 10);
    }

    #[test]
    fn test_fourier_condition_selects_right_endpoint() {
        // f(0) = -9 while f''(0) > 0: signs disagree at the left endpoint,
        // so the iteration must start from x2 = 7.
        let scanner: RootScanner<f64> = RootScanner::with_defaults();
        let mut problem = QuadraticExp::new();

        let solves = scanner.scan(&mut problem, 0.0, 10.0).unwrap();
        let report = solves[0].outcome.as_ref().unwrap();
        assert_eq!(report.initial_guess, 7.0);
        assert_eq!(report.accuracy_by_argument, (report.root - 7.0).abs());
    }

    #[test]
    fn test_fourier_condition_selects_left_endpoint() {
        // f = x² - 1 scanned over [2, 4]: f(2) = 3 > 0 and f'' = 2 > 0
        // agree in sign, but there is no bracket there. Over [-2, 0] with
        // f(-2) = 3 and f(0) = -1 the bracket is found and f(-2)·f''(-2)
        // = 6 > 0 selects the left endpoint.
        let scanner = RootScanner::new(ScanConfig::new(2.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x * x - 1.0, |x| 2.0 * x, |_| 2.0);

        let solves = scanner.scan(&mut problem, -2.0, 0.0).unwrap();
        assert_eq!(solves.len(), 1);

        let report = solves[0].outcome.as_ref().unwrap();
        assert_eq!(report.initial_guess, -2.0);
        assert!((report.root + 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_no_bracket_no_solve() {
        // f > 0 everywhere on the interval: no solve may be triggered.
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x * x + 1.0, |x| 2.0 * x, |_| 2.0);

        let solves = scanner.scan(&mut problem, -3.0, 3.0).unwrap();
        assert!(solves.is_empty());
    }

    #[test]
    fn test_exact_zero_endpoint_is_a_bracket() {
        // f(1) = 0 at a sub-interval boundary: the zero product counts.
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x - 1.0, |_| 1.0, |_| 0.0);

        let solves = scanner.scan(&mut problem, 0.0, 2.0).unwrap();
        assert!(!solves.is_empty());
        let report = solves[0].outcome.as_ref().unwrap();
        assert!((report.root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_multiple_roots() {
        // sin has roots at 0, π, 2π; a fine scan over [0.5, 7] brackets
        // π and 2π.
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x.sin(), |x| x.cos(), |x| -x.sin());

        let solves = scanner.scan(&mut problem, 0.5, 7.0).unwrap();
        assert_eq!(solves.len(), 2);

        let first = solves[0].outcome.as_ref().unwrap();
        let second = solves[1].outcome.as_ref().unwrap();
        assert!((first.root - std::f64::consts::PI).abs() < 1e-8);
        assert!((second.root - 2.0 * std::f64::consts::PI).abs() < 1e-8);
    }

    #[test]
    fn test_one_evaluation_per_boundary() {
        // Scan with no brackets: evaluations must be one per boundary,
        // with the right endpoint's value reused as the next left value.
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x * x + 1.0, |x| 2.0 * x, |_| 2.0);

        let _ = scanner.scan(&mut problem, 0.0, 4.0).unwrap();

        // Boundaries 0..=4 plus the clipped x2 = 4 evaluated again when
        // x = 4 starts the final (zero-width) sub-interval.
        assert_eq!(problem.evaluations(), 6);
    }

    #[test]
    fn test_cumulative_evaluations_in_reports() {
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x.sin(), |x| x.cos(), |x| -x.sin());

        let solves = scanner.scan(&mut problem, 0.5, 7.0).unwrap();
        let first = solves[0].outcome.as_ref().unwrap();
        let second = solves[1].outcome.as_ref().unwrap();

        // The counter is shared across the run and never reset.
        assert!(second.evaluations > first.evaluations);
        assert!(problem.evaluations() >= second.evaluations);
    }

    #[test]
    fn test_degenerate_interval_without_root() {
        let scanner: RootScanner<f64> = RootScanner::with_defaults();
        let mut problem = QuadraticExp::new();

        let solves = scanner.scan(&mut problem, 3.0, 3.0).unwrap();
        assert!(solves.is_empty());
    }

    #[test]
    fn test_degenerate_interval_on_root() {
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(|x: f64| x - 1.0, |_| 1.0, |_| 0.0);

        let solves = scanner.scan(&mut problem, 1.0, 1.0).unwrap();
        assert_eq!(solves.len(), 1);
        let report = solves[0].outcome.as_ref().unwrap();
        assert_eq!(report.root, 1.0);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let scanner: RootScanner<f64> = RootScanner::with_defaults();
        let mut problem = QuadraticExp::new();

        let result = scanner.scan(&mut problem, 10.0, 0.0);
        match result.unwrap_err() {
            SolverError::InvalidInterval { a, b } => {
                assert_eq!(a, 10.0);
                assert_eq!(b, 0.0);
            }
            other => panic!("Expected InvalidInterval error, got {:?}", other),
        }

        assert!(scanner.scan(&mut problem, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_failed_bracket_does_not_abort_scan() {
        // A flat-derivative region makes the first bracket's solve fail;
        // the second root must still be found.
        let scanner = RootScanner::new(ScanConfig::new(1.0, 1e-10, 1e-10, 100));
        let mut problem = ClosureProblem::new(
            |x: f64| if x < 2.0 { x - 0.5 } else { x - 2.5 },
            |x| if x < 2.0 { 0.0 } else { 1.0 },
            |_| 0.0,
        );

        let solves = scanner.scan(&mut problem, 0.0, 4.0).unwrap();
        assert!(solves.len() >= 2);
        assert!(matches!(
            solves[0].outcome,
            Err(SolverError::DerivativeNearZero { .. })
        ));

        let last = solves.last().unwrap().outcome.as_ref().unwrap();
        assert!((last.root - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_idempotence() {
        let scanner: RootScanner<f64> = RootScanner::with_defaults();

        let mut first = QuadraticExp::new();
        let mut second = QuadraticExp::new();
        let a = scanner.scan(&mut first, 0.0, 10.0).unwrap();
        let b = scanner.scan(&mut second, 0.0, 10.0).unwrap();

        let ra = a[0].outcome.as_ref().unwrap();
        let rb = b[0].outcome.as_ref().unwrap();
        assert_eq!(ra.root, rb.root);
        assert_eq!(ra.iterations, rb.iterations);
        assert_eq!(ra.convergence_order, rb.convergence_order);
        assert_eq!(ra.evaluations, rb.evaluations);
    }
}
