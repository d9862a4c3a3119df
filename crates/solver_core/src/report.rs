//! Per-root diagnostics.

use crate::solvers::NewtonSolution;
use std::time::Duration;

/// Diagnostics for one converged root.
///
/// Combines the Newton solution with run-level context: the cumulative
/// evaluation-counter snapshot (shared across the whole run, never reset
/// per bracket) and the wall-clock time of this bracket's solve.
///
/// Reports are produced once per detected bracket and are not retained by
/// the scanner; presentation is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootReport<T> {
    /// The converged root.
    pub root: T,

    /// Function value at the root.
    pub f_root: T,

    /// Number of Newton steps taken for this bracket.
    pub iterations: usize,

    /// The starting point selected by the Fourier condition.
    pub initial_guess: T,

    /// `|root - x0|`: displacement from the initial guess.
    pub accuracy_by_argument: T,

    /// `|x_next - x_prev|` at termination.
    pub final_step: T,

    /// Empirical convergence-order estimate from the last three iterates.
    pub convergence_order: T,

    /// Cumulative function and derivative evaluations at report time.
    pub evaluations: u64,

    /// Wall-clock time of this bracket's solve.
    pub elapsed: Duration,
}

impl<T: Copy> RootReport<T> {
    /// Attach run-level context to a Newton solution.
    pub fn new(solution: NewtonSolution<T>, evaluations: u64, elapsed: Duration) -> Self {
        Self {
            root: solution.root,
            f_root: solution.f_root,
            iterations: solution.iterations,
            initial_guess: solution.initial_guess,
            accuracy_by_argument: solution.accuracy_by_argument,
            final_step: solution.final_step,
            convergence_order: solution.convergence_order,
            evaluations,
            elapsed,
        }
    }
}
