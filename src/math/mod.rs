//! Numeric kernels shared by the leaf and composite functions
//!
//! Everything here is generic over `num_traits::Float` so the same kernels
//! serve `f64` callers and the `f32` values used in tests and benches.
//!
//! None of these helpers validate their inputs: poles and overflow come back
//! as infinity or NaN exactly as IEEE arithmetic produces them.

use num_traits::Float;

/// Raise `x` to `exponent`, using integer powering when the exponent is
/// integral so that small integer powers stay exact.
#[inline]
pub fn pow<T: Float>(x: T, exponent: T) -> T {
    if exponent.fract() == T::zero()
        && let Some(n) = exponent.to_i32()
    {
        return x.powi(n);
    }
    x.powf(exponent)
}

/// Evaluate `c0 + c1*x + ... + cn*x^n` with Horner's scheme
///
/// The fold is seeded with the leading coefficient, so a constant polynomial
/// stays constant even at infinite `x`.
pub fn horner<T: Float>(coeffs: &[T], x: T) -> T {
    match coeffs.split_last() {
        Some((&lead, rest)) => rest.iter().rev().fold(lead, |acc, &c| acc * x + c),
        None => T::zero(),
    }
}

/// Evaluate the derivative `c1 + 2*c2*x + ... + n*cn*x^(n-1)` with Horner's scheme
pub fn horner_derivative<T: Float>(coeffs: &[T], x: T) -> T {
    // i <= coeffs.len(), always representable
    let mut terms = coeffs
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .map(|(i, &c)| T::from(i).unwrap_or_else(T::nan) * c);
    match terms.next() {
        Some(lead) => terms.fold(lead, |acc, term| acc * x + term),
        None => T::zero(),
    }
}

/// Forward finite difference `(f(x + eps) - f(x)) / eps`
///
/// Truncation error grows with `eps`, cancellation error grows as `eps`
/// shrinks; `crate::DERIVATIVE_EPSILON` is the default trade-off.
#[inline]
pub fn forward_difference<T, F>(f: F, x: T, eps: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (f(x + eps) - f(x)) / eps
}
