//! Construction of leaf functions from a kind tag and a tagged payload
//!
//! # Example
//! ```ignore
//! use numfun::{FunctionFactory, NumericFunction};
//!
//! let factory = FunctionFactory::new();
//! let sq = factory.create("power", 2.0)?;
//! let g = factory.create("polynomial", vec![7.0, 0.0, 3.0, 15.0])?;
//! let x = factory.create("ident", ())?;
//! assert_eq!(g.evaluate(10.0), 15307.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FunctionError;
use crate::function::Function;

/// Leaf kinds the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionType {
    Identity,
    Constant,
    Power,
    Exponential,
    Polynomial,
}

impl FunctionType {
    pub const ALL: [FunctionType; 5] = [
        FunctionType::Identity,
        FunctionType::Constant,
        FunctionType::Power,
        FunctionType::Exponential,
        FunctionType::Polynomial,
    ];

    /// Kind tag accepted by [`FunctionFactory::create`]
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionType::Identity => "ident",
            FunctionType::Constant => "const",
            FunctionType::Power => "power",
            FunctionType::Exponential => "exp",
            FunctionType::Polynomial => "polynomial",
        }
    }

    /// Shape of payload this kind requires
    pub fn expected_param(&self) -> &'static str {
        match self {
            FunctionType::Identity | FunctionType::Exponential => "no",
            FunctionType::Constant | FunctionType::Power => "a scalar",
            FunctionType::Polynomial => "a sequence",
        }
    }
}

impl FromStr for FunctionType {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FunctionError::unsupported_kind(s))
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Factory payload, one case per payload shape
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Param {
    /// No parameter ("ident", "exp")
    #[default]
    None,
    /// Single real ("const", "power")
    Scalar(f64),
    /// Ordered reals ("polynomial")
    Sequence(Vec<f64>),
}

impl Param {
    pub fn type_name(&self) -> &'static str {
        match self {
            Param::None => "no parameter",
            Param::Scalar(_) => "a scalar",
            Param::Sequence(_) => "a sequence",
        }
    }
}

impl From<()> for Param {
    fn from(_: ()) -> Self {
        Param::None
    }
}

impl From<f64> for Param {
    fn from(n: f64) -> Self {
        Param::Scalar(n)
    }
}

impl From<f32> for Param {
    fn from(n: f32) -> Self {
        Param::Scalar(n as f64)
    }
}

impl From<i32> for Param {
    fn from(n: i32) -> Self {
        Param::Scalar(n as f64)
    }
}

impl From<Vec<f64>> for Param {
    fn from(v: Vec<f64>) -> Self {
        Param::Sequence(v)
    }
}

impl From<&[f64]> for Param {
    fn from(v: &[f64]) -> Self {
        Param::Sequence(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Param {
    fn from(v: [f64; N]) -> Self {
        Param::Sequence(v.to_vec())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Param::None,
        }
    }
}

/// Builds fresh leaf functions. Stateless; every call returns a new node.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionFactory;

impl FunctionFactory {
    pub fn new() -> Self {
        FunctionFactory
    }

    /// Build the leaf named by `kind` from `param`.
    ///
    /// # Errors
    /// - `UnsupportedKind` if `kind` is not one of "ident", "const", "power",
    ///   "exp", "polynomial"
    /// - `PayloadMismatch` if `param` does not have the shape `kind` needs
    pub fn create(&self, kind: &str, param: impl Into<Param>) -> Result<Function, FunctionError> {
        let kind = kind.parse::<FunctionType>().inspect_err(|err| {
            log::debug!("factory rejected kind: {}", err);
        })?;
        self.create_typed(kind, param)
    }

    /// Build a leaf from an already parsed kind
    pub fn create_typed(
        &self,
        kind: FunctionType,
        param: impl Into<Param>,
    ) -> Result<Function, FunctionError> {
        let param = param.into();
        let function = match (kind, param) {
            (FunctionType::Identity, Param::None) => Function::identity(),
            (FunctionType::Constant, Param::Scalar(c)) => Function::constant(c),
            (FunctionType::Power, Param::Scalar(e)) => Function::power(e),
            (FunctionType::Exponential, Param::None) => Function::exp(),
            (FunctionType::Polynomial, Param::Sequence(coeffs)) => Function::polynomial(coeffs),
            (kind, param) => {
                let err = FunctionError::payload_mismatch(
                    kind.as_str(),
                    kind.expected_param(),
                    param.type_name(),
                );
                log::debug!("factory rejected payload: {}", err);
                return Err(err);
            }
        };
        Ok(function)
    }
}
