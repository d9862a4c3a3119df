//! Root-location algorithms: interval scanning and Newton refinement.
//!
//! ## Available Components
//!
//! - [`RootScanner`]: partitions an interval into fixed-width sub-intervals,
//!   detects sign-change brackets, and refines each one
//! - [`NewtonSolver`]: safeguarded Newton-Raphson iteration with dual
//!   stopping criteria (argument-space and function-space tolerances)
//!
//! ## Configuration
//!
//! Both components share [`ScanConfig`]:
//! - `step`: scan sub-interval width (default: 7.0)
//! - `eps_argument` / `eps_function`: convergence tolerances (default: 1e-5)
//! - `max_iterations`: Newton iteration cap (default: 100)
//!
//! ## Example
//!
//! ```
//! use solver_core::problem::QuadraticExp;
//! use solver_core::solvers::{RootScanner, ScanConfig};
//!
//! let mut problem = QuadraticExp::new();
//! let scanner = RootScanner::new(ScanConfig::default());
//!
//! for solve in scanner.scan(&mut problem, 0.0_f64, 10.0).unwrap() {
//!     let report = solve.outcome.unwrap();
//!     assert!(report.f_root.abs() < 1e-5);
//! }
//! ```

mod config;
mod newton;
mod scan;

// Re-export public types at module level
pub use config::ScanConfig;
pub use newton::{NewtonSolution, NewtonSolver};
pub use scan::{Bracket, BracketSolve, RootScanner};
