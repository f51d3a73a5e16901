//! Sign-following descent toward a zero of a function
//!
//! The update is `x <- x - step * sign(f(x)) * f'(x)` with a step that stays
//! fixed for the whole run: no line search, no backtracking. This settles
//! reliably on smooth, well-scaled minima that touch zero (a centered
//! parabola), and may oscillate or diverge elsewhere. The solver never fails;
//! use [`SolveReport::converged`] or re-evaluate the returned point when a
//! guarantee matters.
//!
//! # Example
//! ```ignore
//! use numfun::{Function, Solver};
//!
//! // (x - 2)^2
//! let f = Function::polynomial([4.0, -4.0, 1.0]);
//! let report = Solver::new().max_iterations(1000).seed(7).solve_report(&f);
//! assert!(report.converged);
//! assert!((report.root - 2.0).abs() < 0.01);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::function::Function;
use crate::traits::NumericFunction;
use crate::{CONVERGENCE_TOLERANCE, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP, INITIAL_GUESS_RANGE};

/// Outcome of one solver run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveReport {
    /// Final candidate, returned whether or not it converged
    pub root: f64,
    /// `f(root)`
    pub residual: f64,
    /// Number of update steps taken
    pub iterations: usize,
    /// Finite root with `|residual| < tolerance`
    pub converged: bool,
}

/// Builder for solver runs
#[derive(Debug, Clone)]
pub struct Solver {
    max_iterations: usize,
    step: f64,
    tolerance: f64,
    initial_guess: Option<f64>,
    seed: Option<u64>,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step: DEFAULT_STEP,
            tolerance: CONVERGENCE_TOLERANCE,
            initial_guess: None,
            seed: None,
        }
    }
}

impl Solver {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on update steps
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Fixed step coefficient applied to the derivative
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Stop once `|f(x)|` drops below this
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Start from `x0` instead of a random point
    pub fn initial_guess(mut self, x0: f64) -> Self {
        self.initial_guess = Some(x0);
        self
    }

    /// Seed the random starting point so runs are reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starting point this configuration uses.
    ///
    /// Without an explicit guess the point is drawn uniformly from
    /// [`INITIAL_GUESS_RANGE`]; unseeded draws use the thread RNG.
    pub fn starting_point(&self) -> f64 {
        match (self.initial_guess, self.seed) {
            (Some(x0), _) => x0,
            (None, Some(seed)) => ChaCha8Rng::seed_from_u64(seed).gen_range(INITIAL_GUESS_RANGE),
            (None, None) => rand::thread_rng().gen_range(INITIAL_GUESS_RANGE),
        }
    }

    /// Run and return only the final candidate
    pub fn solve<F: NumericFunction + ?Sized>(&self, f: &F) -> f64 {
        self.solve_report(f).root
    }

    /// Run and return the candidate together with convergence details
    pub fn solve_report<F: NumericFunction + ?Sized>(&self, f: &F) -> SolveReport {
        self.solve_from(f, self.starting_point())
    }

    /// Run from an explicit start, ignoring the configured guess and seed
    pub fn solve_from<F: NumericFunction + ?Sized>(&self, f: &F, start: f64) -> SolveReport {
        log::debug!(
            "solving {} from x0 = {} (max_iterations = {}, step = {})",
            f.describe(),
            start,
            self.max_iterations,
            self.step
        );

        let mut x = start;
        let mut iterations = 0;

        while iterations < self.max_iterations {
            let value = f.evaluate(x);
            if value.abs() < self.tolerance {
                break;
            }

            let slope = f.derivative(x);
            x = if value > 0.0 {
                x - self.step * slope
            } else {
                x + self.step * slope
            };
            iterations += 1;
            log::trace!("iteration {}: f = {}, f' = {}, x -> {}", iterations, value, slope, x);

            if !x.is_finite() {
                log::debug!("candidate left the finite range after {} iterations", iterations);
                break;
            }
        }

        let residual = f.evaluate(x);
        let report = SolveReport {
            root: x,
            residual,
            iterations,
            converged: x.is_finite() && residual.abs() < self.tolerance,
        };
        log::debug!(
            "finished at x = {} (f = {}, iterations = {}, converged = {})",
            report.root,
            report.residual,
            report.iterations,
            report.converged
        );
        report
    }
}

/// Run the solver with default step and tolerance.
///
/// The step is [`DEFAULT_STEP`] (0.25), not 1.0: with a unit step the update
/// on `(x - a)^2` is the 2-cycle `x -> 2a - x` and never settles. Use
/// `Solver::new().step(1.0)` for the unit-step behavior.
///
/// `initial_guess = None` draws the start from [`INITIAL_GUESS_RANGE`].
pub fn solve<F: NumericFunction + ?Sized>(
    f: &F,
    max_iterations: usize,
    initial_guess: Option<f64>,
) -> f64 {
    let mut solver = Solver::new().max_iterations(max_iterations);
    if let Some(x0) = initial_guess {
        solver = solver.initial_guess(x0);
    }
    solver.solve(f)
}

impl Function {
    /// Search for a zero from a random start within `max_iterations` steps,
    /// using the same defaults as [`solve`]
    pub fn solve(&self, max_iterations: usize) -> f64 {
        solve(self, max_iterations, None)
    }
}
