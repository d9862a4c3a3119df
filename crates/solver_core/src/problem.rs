//! Target functions and their derivatives.
//!
//! A [`Problem`] bundles a scalar function with its first and second
//! derivatives and an evaluation counter, so the whole unit can be swapped
//! for a different target function without touching the root locator.
//!
//! Two implementations are provided:
//!
//! - [`QuadraticExp`]: the built-in problem `f(x) = 0.5x² - 10 + 2⁻ˣ`
//! - [`ClosureProblem`]: an adapter wrapping three closures, useful for
//!   substituting alternative problems and for testing

use num_traits::Float;
use std::marker::PhantomData;

/// A scalar root-finding problem with closed-form derivatives.
///
/// Each call to [`f`](Problem::f), [`df`](Problem::df), or
/// [`d2f`](Problem::d2f) increments the instance's evaluation counter by
/// exactly one. The counter is monotonically non-decreasing and is never
/// reset during a run; it measures the total computational cost of a scan.
///
/// The methods take `&mut self` only for the counter update. Apart from
/// that, implementations must behave as pure functions of `x`.
pub trait Problem<T: Float> {
    /// Evaluate the function at `x`.
    fn f(&mut self, x: T) -> T;

    /// Evaluate the first derivative at `x`.
    fn df(&mut self, x: T) -> T;

    /// Evaluate the second derivative at `x`.
    fn d2f(&mut self, x: T) -> T;

    /// Cumulative number of calls to `f`, `df`, and `d2f`.
    fn evaluations(&self) -> u64;
}

/// The built-in problem: `f(x) = 0.5x² - 10 + 2⁻ˣ`.
///
/// Derivatives:
/// - `f'(x) = x - 2⁻ˣ ln 2`
/// - `f''(x) = 1 + 2⁻ˣ ln² 2`
///
/// The domain is all reals and the function has no singularities. On
/// `[0, 10]` it has a single root near `x ≈ 4.462`.
///
/// # Example
///
/// ```
/// use solver_core::problem::{Problem, QuadraticExp};
///
/// let mut problem = QuadraticExp::new();
/// assert!((problem.f(0.0_f64) + 9.0).abs() < 1e-12);
/// assert_eq!(Problem::<f64>::evaluations(&problem), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadraticExp {
    evaluations: u64,
}

impl QuadraticExp {
    /// Create the built-in problem with a fresh evaluation counter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Float> Problem<T> for QuadraticExp {
    fn f(&mut self, x: T) -> T {
        self.evaluations += 1;
        let half = T::from(0.5).unwrap();
        let ten = T::from(10.0).unwrap();
        half * x * x - ten + two_pow_neg(x)
    }

    fn df(&mut self, x: T) -> T {
        self.evaluations += 1;
        let ln2 = T::from(std::f64::consts::LN_2).unwrap();
        x - two_pow_neg(x) * ln2
    }

    fn d2f(&mut self, x: T) -> T {
        self.evaluations += 1;
        let ln2 = T::from(std::f64::consts::LN_2).unwrap();
        T::one() + two_pow_neg(x) * ln2 * ln2
    }

    fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

/// `2⁻ˣ` for any floating-point type.
fn two_pow_neg<T: Float>(x: T) -> T {
    let ln2 = T::from(std::f64::consts::LN_2).unwrap();
    (-(x * ln2)).exp()
}

/// A [`Problem`] built from three closures.
///
/// Lets callers substitute an alternative target function without defining
/// a new type, while keeping the evaluation-counter contract.
///
/// # Example
///
/// ```
/// use solver_core::problem::{ClosureProblem, Problem};
///
/// // x² - 2, with root √2
/// let mut problem = ClosureProblem::new(
///     |x: f64| x * x - 2.0,
///     |x| 2.0 * x,
///     |_| 2.0,
/// );
///
/// assert!((problem.f(2.0) - 2.0).abs() < 1e-12);
/// assert!((problem.df(3.0) - 6.0).abs() < 1e-12);
/// assert_eq!(problem.evaluations(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ClosureProblem<T, F, D, D2>
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
    D2: Fn(T) -> T,
{
    f: F,
    df: D,
    d2f: D2,
    evaluations: u64,
    _phantom: PhantomData<T>,
}

impl<T, F, D, D2> ClosureProblem<T, F, D, D2>
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
    D2: Fn(T) -> T,
{
    /// Create a problem from a function and its first two derivatives.
    pub fn new(f: F, df: D, d2f: D2) -> Self {
        Self {
            f,
            df,
            d2f,
            evaluations: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T, F, D, D2> Problem<T> for ClosureProblem<T, F, D, D2>
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
    D2: Fn(T) -> T,
{
    fn f(&mut self, x: T) -> T {
        self.evaluations += 1;
        (self.f)(x)
    }

    fn df(&mut self, x: T) -> T {
        self.evaluations += 1;
        (self.df)(x)
    }

    fn d2f(&mut self, x: T) -> T {
        self.evaluations += 1;
        (self.d2f)(x)
    }

    fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
