//! Composable Numeric Functions
//!
//! Single-variable real functions as values: evaluate them, differentiate
//! them, print them, and glue them together with `+ - * /` into expression
//! trees that are built lazily and never simplified.
//!
//! # Features
//! - Leaf functions with exact derivatives: identity, constant, power,
//!   exponential, polynomial
//! - **Operator overloading** builds composite nodes that share their operands
//! - Finite-difference derivatives for composites
//! - **Factory API** building leaves from a kind tag and a payload
//! - Sign-following root solver with a fixed iteration budget
//! - Parallel batch evaluation and multi-start solving (`parallel` feature)
//!
//! # Usage Examples
//!
//! ## Building functions
//! ```ignore
//! use numfun::{Function, FunctionFactory, NumericFunction};
//!
//! let factory = FunctionFactory::new();
//! let f = factory.create("power", 2.0)?;                          // x^2
//! let g = factory.create("polynomial", vec![7.0, 0.0, 3.0, 15.0])?; // 7 + 3x^2 + 15x^3
//! let q = factory.create("const", 3.0)?;
//!
//! let h = &(&(&f * &q) + &(&g / &q)) - &q;
//! println!("{} at 10 is {}", h, h.evaluate(10.0));
//! ```
//!
//! ## Solving
//! ```ignore
//! use numfun::{Function, Solver};
//!
//! let f = Function::polynomial([4.0, -4.0, 1.0]); // (x - 2)^2
//! let root = Solver::new().max_iterations(1000).solve(&f);
//! assert!((root - 2.0).abs() < 0.01);
//! ```

use std::ops::RangeInclusive;

mod display;
mod error;
mod factory;
mod function;
pub mod leaf;
pub(crate) mod math;
mod ops;
mod solver;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use error::{FunctionError, OperandSide};
pub use factory::{FunctionFactory, FunctionType, Param};
pub use function::{BinaryOp, Function, FunctionKind};
pub use leaf::{Constant, Exponential, Identity, Polynomial, Power};
pub use ops::Operand;
pub use solver::{SolveReport, Solver, solve};
pub use traits::NumericFunction;

/// Perturbation used by composite derivatives, `(f(x + eps) - f(x)) / eps`.
///
/// Larger values add truncation error, smaller ones add cancellation error.
/// Use [`Function::derivative_with_step`] to try another value.
pub const DERIVATIVE_EPSILON: f64 = 1e-6;

/// Solver stops once `|f(x)|` is below this
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Default solver iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default fixed step coefficient of the solver
///
/// At 1.0 the update on a centered parabola `(x - a)^2` is `x -> 2a - x`,
/// a 2-cycle; 0.25 halves the distance to `a` each iteration instead.
pub const DEFAULT_STEP: f64 = 0.25;

/// Interval the solver draws its starting point from when none is given
pub const INITIAL_GUESS_RANGE: RangeInclusive<f64> = -1000.0..=1000.0;
