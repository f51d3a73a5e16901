/// Capability shared by every function-like object in the crate.
///
/// Implementors must be immutable after construction: all three methods are
/// pure with respect to `self`. Numeric degeneracy (poles, overflow) is
/// reported through the returned `f64` as infinity or NaN, never as a panic.
///
/// The solver is generic over this trait, so callers can plug in their own
/// types next to the built-in variants.
///
/// # Example
/// ```ignore
/// use numfun::{Function, NumericFunction};
///
/// let f = Function::power(2.0);
/// assert_eq!(f.evaluate(3.0), 9.0);
/// assert_eq!(f.derivative(3.0), 6.0);
/// assert_eq!(f.describe(), "x^2.000000");
/// ```
pub trait NumericFunction {
    /// Value of the function at `x`
    fn evaluate(&self, x: f64) -> f64;

    /// First derivative at `x`
    fn derivative(&self, x: f64) -> f64;

    /// Canonical human-readable form
    fn describe(&self) -> String;
}

impl<F: NumericFunction + ?Sized> NumericFunction for &F {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<F: NumericFunction + ?Sized> NumericFunction for Box<F> {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
