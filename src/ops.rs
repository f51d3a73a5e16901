//! Arithmetic composition of functions
//!
//! `+ - * /` between two functions never evaluate anything: they build a new
//! composite node that shares both operands.
//!
//! ```ignore
//! use numfun::{Function, NumericFunction};
//!
//! let f = Function::constant(3.0) * Function::power(2.0);
//! assert_eq!(f.evaluate(2.0), 12.0);
//! ```
//!
//! There are no operator impls between a `Function` and a plain
//! number, string or vector, so mixing them is a compile error. Values whose
//! type is only known at runtime go through [`Operand::combine`], which
//! rejects non-function operands with [`FunctionError::InvalidOperand`].

use std::ops::{Add, Div, Mul, Sub};

use crate::error::{FunctionError, OperandSide};
use crate::function::{BinaryOp, Function};

// ===== Macro for generating operator implementations =====
// Generates all four operators for one (lhs, rhs) pair of handle types

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Function;
            fn add(self, rhs: $rhs) -> Function {
                Function::composite(BinaryOp::Add, &self, &rhs)
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Function;
            fn sub(self, rhs: $rhs) -> Function {
                Function::composite(BinaryOp::Sub, &self, &rhs)
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Function;
            fn mul(self, rhs: $rhs) -> Function {
                Function::composite(BinaryOp::Mul, &self, &rhs)
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Function;
            fn div(self, rhs: $rhs) -> Function {
                Function::composite(BinaryOp::Div, &self, &rhs)
            }
        }
    };
}

impl_binary_ops!(Function, Function);
impl_binary_ops!(Function, &Function);
impl_binary_ops!(&Function, Function);
impl_binary_ops!(&Function, &Function);

/// A dynamically typed value offered as an arithmetic operand.
///
/// Only the `Function` case can take part in a composition; the rest exist
/// so callers holding loosely typed input can be told precisely what was
/// wrong with it.
#[derive(Debug, Clone)]
pub enum Operand {
    Function(Function),
    Number(f64),
    Integer(i64),
    Text(String),
    Sequence(Vec<f64>),
}

impl Operand {
    /// Short description of the carried type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Function(_) => "a function",
            Operand::Number(_) => "a number",
            Operand::Integer(_) => "an integer",
            Operand::Text(_) => "text",
            Operand::Sequence(_) => "a sequence",
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Operand::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Compose two operands with `op`.
    ///
    /// Fails with `InvalidOperand` if either side is not a function; the left
    /// side is checked first. Two functions always succeed.
    ///
    /// # Example
    /// ```ignore
    /// use numfun::{BinaryOp, Function, Operand};
    ///
    /// let x = Function::identity();
    /// assert!(Operand::combine(&x, BinaryOp::Add, &x).is_ok());
    /// assert!(Operand::combine(&x, BinaryOp::Add, "abs").is_err());
    /// assert!(Operand::combine(123, BinaryOp::Add, &x).is_err());
    /// ```
    pub fn combine(
        lhs: impl Into<Operand>,
        op: BinaryOp,
        rhs: impl Into<Operand>,
    ) -> Result<Function, FunctionError> {
        let lhs = lhs.into();
        let rhs = rhs.into();

        let left = lhs
            .as_function()
            .ok_or_else(|| reject(op, OperandSide::Left, &lhs))?;
        let right = rhs
            .as_function()
            .ok_or_else(|| reject(op, OperandSide::Right, &rhs))?;

        Ok(Function::composite(op, left, right))
    }
}

fn reject(op: BinaryOp, side: OperandSide, operand: &Operand) -> FunctionError {
    log::debug!(
        "rejected {} operand for '{}': {}",
        side.as_str(),
        op,
        operand.type_name()
    );
    FunctionError::invalid_operand(op, side, operand.type_name())
}

impl Function {
    /// Runtime-checked composition, see [`Operand::combine`]
    pub fn try_combine(
        lhs: impl Into<Operand>,
        op: BinaryOp,
        rhs: impl Into<Operand>,
    ) -> Result<Function, FunctionError> {
        Operand::combine(lhs, op, rhs)
    }
}

impl From<Function> for Operand {
    fn from(f: Function) -> Self {
        Operand::Function(f)
    }
}

impl From<&Function> for Operand {
    fn from(f: &Function) -> Self {
        Operand::Function(f.clone())
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<f32> for Operand {
    fn from(n: f32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Integer(n as i64)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Integer(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(v: Vec<f64>) -> Self {
        Operand::Sequence(v)
    }
}

impl From<&[f64]> for Operand {
    fn from(v: &[f64]) -> Self {
        Operand::Sequence(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumericFunction;

    #[test]
    fn test_all_handle_combinations_compose() {
        let a = Function::constant(2.0);
        let b = Function::identity();

        assert_eq!((&a + &b).evaluate(3.0), 5.0);
        assert_eq!((a.clone() + &b).evaluate(3.0), 5.0);
        assert_eq!((&a + b.clone()).evaluate(3.0), 5.0);
        assert_eq!((a.clone() + b.clone()).evaluate(3.0), 5.0);
        assert_eq!((a - b).evaluate(3.0), -1.0);
    }

    #[test]
    fn test_operators_share_operands() {
        let sq = Function::power(2.0);
        let sum = &sq + &sq;
        let (op, left, right) = sum.as_composite().expect("composite");
        assert_eq!(op, BinaryOp::Add);
        assert!(left.ptr_eq(&sq));
        assert!(right.ptr_eq(&sq));
    }

    #[test]
    fn test_combine_two_functions() {
        let x = Function::identity();
        let f = Operand::combine(&x, BinaryOp::Mul, Function::constant(4.0)).unwrap();
        assert_eq!(f.evaluate(2.5), 10.0);
    }

    #[test]
    fn test_combine_rejects_left_non_function() {
        let x = Function::identity();
        let err = Operand::combine(123, BinaryOp::Add, &x).unwrap_err();
        assert_eq!(
            err,
            FunctionError::invalid_operand(BinaryOp::Add, OperandSide::Left, "an integer")
        );
    }

    #[test]
    fn test_combine_rejects_right_non_function() {
        let x = Function::identity();
        let err = Function::try_combine(&x, BinaryOp::Div, "abs").unwrap_err();
        assert_eq!(
            err,
            FunctionError::invalid_operand(BinaryOp::Div, OperandSide::Right, "text")
        );
    }

    #[test]
    fn test_combine_checks_left_first() {
        let err = Operand::combine(1.0, BinaryOp::Sub, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            FunctionError::InvalidOperand {
                side: OperandSide::Left,
                found: "a number",
                ..
            }
        ));
    }

    #[test]
    fn test_operand_type_names() {
        let slice: &[f64] = &[1.0];
        assert_eq!(Operand::from(slice).type_name(), "a sequence");
        assert_eq!(Operand::from(2.0_f32).type_name(), "a number");
        assert_eq!(Operand::from(7_i64).type_name(), "an integer");
        assert_eq!(Operand::from(String::from("x")).type_name(), "text");
        assert_eq!(Operand::from(Function::exp()).type_name(), "a function");
    }
}
