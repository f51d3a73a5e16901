use std::fmt;

use crate::function::BinaryOp;

/// Which side of a binary composition an operand sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl OperandSide {
    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OperandSide::Left => "left",
            OperandSide::Right => "right",
        }
    }
}

/// Structural errors raised while building functions.
///
/// Numeric degeneracy (division by zero, overflow, NaN) is never reported
/// here; it flows through evaluation as ordinary IEEE values.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Factory was given a kind tag it does not know
    UnsupportedKind { kind: String },

    /// Factory payload does not have the shape the kind requires
    PayloadMismatch {
        kind: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A non-function value was used as an arithmetic operand
    InvalidOperand {
        op: BinaryOp,
        side: OperandSide,
        found: &'static str,
    },
}

impl FunctionError {
    /// Create UnsupportedKind from any string-like tag
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        FunctionError::UnsupportedKind { kind: kind.into() }
    }

    /// Create PayloadMismatch for a kind
    pub fn payload_mismatch(
        kind: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        FunctionError::PayloadMismatch {
            kind: kind.into(),
            expected,
            found,
        }
    }

    /// Create InvalidOperand for one side of `op`
    pub fn invalid_operand(op: BinaryOp, side: OperandSide, found: &'static str) -> Self {
        FunctionError::InvalidOperand { op, side, found }
    }
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::UnsupportedKind { kind } => {
                write!(f, "Unsupported function kind: '{}'", kind)
            }
            FunctionError::PayloadMismatch {
                kind,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Function kind '{}' expects {} parameter, but got {}",
                    kind, expected, found
                )
            }
            FunctionError::InvalidOperand { op, side, found } => {
                write!(
                    f,
                    "Invalid {} operand for '{}': expected a function, got {}",
                    side.as_str(),
                    op.symbol(),
                    found
                )
            }
        }
    }
}

impl std::error::Error for FunctionError {}
