// Display formatting for function trees
use crate::function::{Function, FunctionKind};
use std::fmt;

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            FunctionKind::Identity(inner) => write!(f, "{}", inner),
            FunctionKind::Constant(inner) => write!(f, "{}", inner),
            FunctionKind::Power(inner) => write!(f, "{}", inner),
            FunctionKind::Exponential(inner) => write!(f, "{}", inner),
            FunctionKind::Polynomial(inner) => write!(f, "{}", inner),
            // Both operands are always parenthesized, even leaves
            FunctionKind::Composite { op, left, right } => {
                write!(f, "({}){}({})", left, op.symbol(), right)
            }
        }
    }
}

impl fmt::Display for crate::function::BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use crate::function::BinaryOp;
    use crate::{Function, NumericFunction};

    #[test]
    fn test_leaf_display() {
        assert_eq!(format!("{}", Function::identity()), "x");
        assert_eq!(format!("{}", Function::constant(-1.25)), "-1.250000");
        assert_eq!(format!("{}", Function::power(3.0)), "x^3.000000");
        assert_eq!(format!("{}", Function::exp()), "e^x");
        assert_eq!(
            format!("{}", Function::polynomial([4.0, -4.0, 1.0])),
            "4 + -4*x^1 + 1*x^2"
        );
    }

    #[test]
    fn test_composite_display() {
        let f = Function::power(2.0);
        let q = Function::constant(3.0);
        let g = Function::polynomial([7.0, 0.0, 3.0, 15.0]);

        let h = &(&(&f * &q) + &(&g / &q)) - &q;
        assert_eq!(
            h.describe(),
            "(((x^2.000000)*(3.000000))+((7 + 0*x^1 + 3*x^2 + 15*x^3)/(3.000000)))-(3.000000)"
        );
    }

    #[test]
    fn test_binary_op_display() {
        assert_eq!(BinaryOp::Sub.to_string(), "-");
        assert_eq!(BinaryOp::Div.to_string(), "/");
    }

    #[test]
    fn test_describe_is_deterministic() {
        let f = &Function::exp() / &Function::identity();
        assert_eq!(f.describe(), f.describe());
        assert_eq!(f.describe(), f.to_string());
    }
}
