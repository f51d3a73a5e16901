//! Parallel batch evaluation and multi-start solving using Rayon
//!
//! Function trees are immutable and `Send + Sync`, so the same tree is read
//! from every worker without locking.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! numfun = { version = "0.1", features = ["parallel"] }
//! ```

use rayon::prelude::*;

use crate::Function;
use crate::solver::{SolveReport, Solver};
use crate::traits::NumericFunction;

/// Evaluate every function at every point.
///
/// Returns `results[function_idx][point_idx]`. Non-finite values are kept
/// as they are.
///
/// # Example
/// ```ignore
/// use numfun::{Function, parallel::evaluate_parallel};
///
/// let fs = vec![Function::identity(), Function::power(2.0)];
/// let table = evaluate_parallel(&fs, &[1.0, 2.0, 3.0]);
/// assert_eq!(table[1], vec![1.0, 4.0, 9.0]);
/// ```
pub fn evaluate_parallel(functions: &[Function], points: &[f64]) -> Vec<Vec<f64>> {
    functions
        .par_iter()
        .map(|f| points.par_iter().map(|&x| f.evaluate(x)).collect::<Vec<f64>>())
        .collect()
}

/// Run `solver` once per start point, concurrently.
///
/// The solver's own initial guess and seed are ignored; each run starts at
/// the corresponding entry of `starts`. Reports come back in input order.
pub fn solve_parallel<F>(f: &F, solver: &Solver, starts: &[f64]) -> Vec<SolveReport>
where
    F: NumericFunction + Sync + ?Sized,
{
    starts
        .par_iter()
        .map(|&x0| solver.solve_from(f, x0))
        .collect()
}

/// Report with the smallest finite `|residual|`, if any
pub fn best_root(reports: &[SolveReport]) -> Option<SolveReport> {
    reports
        .iter()
        .filter(|r| r.root.is_finite() && r.residual.is_finite())
        .min_by(|a, b| a.residual.abs().total_cmp(&b.residual.abs()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_parallel_matches_sequential() {
        let x = Function::identity();
        let fs = vec![
            Function::polynomial([1.0, 1.0]),
            &Function::constant(3.0) * &Function::power(2.0),
            &Function::constant(1.0) / &x,
        ];
        let points = [-2.0, 0.0, 2.0];
        let table = evaluate_parallel(&fs, &points);

        assert_eq!(table.len(), 3);
        for (f, row) in fs.iter().zip(&table) {
            assert_eq!(row.len(), points.len());
            for (&p, &v) in points.iter().zip(row) {
                let expected = f.evaluate(p);
                assert!(v == expected || (v.is_nan() && expected.is_nan()));
            }
        }
        assert!(table[2][1].is_infinite());
    }

    #[test]
    fn test_solve_parallel_keeps_order() {
        let f = Function::polynomial([4.0, -4.0, 1.0]);
        let starts = [-500.0, 2.0, 750.0];
        let reports = solve_parallel(&f, &Solver::new(), &starts);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].iterations, 0);
        for r in &reports {
            assert!(r.converged);
            assert!((r.root - 2.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_best_root_skips_non_finite() {
        let reports = [
            SolveReport {
                root: f64::INFINITY,
                residual: 0.0,
                iterations: 1,
                converged: false,
            },
            SolveReport {
                root: 1.0,
                residual: -0.5,
                iterations: 10,
                converged: false,
            },
            SolveReport {
                root: 2.0,
                residual: 0.1,
                iterations: 10,
                converged: false,
            },
        ];
        assert_eq!(best_root(&reports).map(|r| r.root), Some(2.0));
        assert_eq!(best_root(&[]), None);
    }
}
