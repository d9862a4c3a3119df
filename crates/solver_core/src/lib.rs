//! # solver_core: Bracketing and Newton-Raphson Root Location
//!
//! This crate locates real roots of a scalar nonlinear function on a
//! user-given interval by combining coarse fixed-step scanning (bracketing)
//! with safeguarded Newton-Raphson refinement.
//!
//! ## Components
//!
//! - [`problem`]: the target function, its first two derivatives, and the
//!   shared evaluation counter, behind the [`problem::Problem`] trait
//! - [`solvers`]: the interval scanner and the Newton iteration
//! - [`report`]: per-root diagnostics produced by a scan
//! - [`error`]: structured solver errors
//!
//! ## Usage Example
//!
//! ```rust
//! use solver_core::problem::QuadraticExp;
//! use solver_core::solvers::{RootScanner, ScanConfig};
//!
//! let mut problem = QuadraticExp::new();
//! let scanner: RootScanner<f64> = RootScanner::new(ScanConfig::default());
//!
//! let solves = scanner.scan(&mut problem, 0.0, 10.0).unwrap();
//! assert_eq!(solves.len(), 1);
//!
//! let report = solves[0].outcome.as_ref().unwrap();
//! assert!(report.f_root.abs() < 1e-5);
//! ```
//!
//! ## Minimal Dependency Principle
//!
//! The core layer has no dependency on the CLI crate, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod problem;
pub mod report;
pub mod solvers;
