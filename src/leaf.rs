//! Terminal function variants with closed-form values and derivatives

use std::fmt;

use crate::math;
use crate::traits::NumericFunction;

/// `f(x) = x`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Identity;

/// `f(x) = c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    value: f64,
}

/// `f(x) = x^e`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power {
    exponent: f64,
}

/// `f(x) = e^x`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Exponential;

/// `f(x) = c0 + c1*x + ... + cn*x^n`
///
/// Coefficients are stored lowest degree first. An empty coefficient list is
/// the zero polynomial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Constant { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Power {
    pub fn new(exponent: f64) -> Self {
        Power { exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Polynomial {
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Self {
        Polynomial {
            coeffs: coeffs.into(),
        }
    }

    /// Coefficients, lowest degree first
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Highest power with a stored coefficient (zero coefficients included)
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }
}

// ===== NumericFunction =====

impl NumericFunction for Identity {
    fn evaluate(&self, x: f64) -> f64 {
        x
    }

    fn derivative(&self, _x: f64) -> f64 {
        1.0
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericFunction for Constant {
    fn evaluate(&self, _x: f64) -> f64 {
        self.value
    }

    fn derivative(&self, _x: f64) -> f64 {
        0.0
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericFunction for Power {
    fn evaluate(&self, x: f64) -> f64 {
        math::pow(x, self.exponent)
    }

    // 0 * x^-1 at x = 0 is NaN for the zero exponent; left as is
    fn derivative(&self, x: f64) -> f64 {
        self.exponent * math::pow(x, self.exponent - 1.0)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericFunction for Exponential {
    fn evaluate(&self, x: f64) -> f64 {
        x.exp()
    }

    fn derivative(&self, x: f64) -> f64 {
        x.exp()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericFunction for Polynomial {
    fn evaluate(&self, x: f64) -> f64 {
        math::horner(&self.coeffs, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        math::horner_derivative(&self.coeffs, x)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

// ===== Display =====

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x")
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.value)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x^{:.6}", self.exponent)
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e^x")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        for (i, c) in self.coeffs.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", c)?;
            } else {
                write!(f, " + {}*x^{}", c, i)?;
            }
        }
        Ok(())
    }
}
