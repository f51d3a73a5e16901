//! Function handles and the composite expression tree

use std::ops::Deref;
use std::sync::{Arc, LazyLock};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::leaf::{Constant, Exponential, Identity, Polynomial, Power};
use crate::traits::NumericFunction;
use crate::{DERIVATIVE_EPSILON, math};

/// Global counter for node IDs
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Arithmetic operator stored in a composite node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operator character used when rendering composites
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Combine two already evaluated operands
    ///
    /// Division by zero follows IEEE semantics (infinity or NaN).
    #[inline]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

/// Every shape a function node can take
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionKind {
    Identity(Identity),
    Constant(Constant),
    Power(Power),
    Exponential(Exponential),
    Polynomial(Polynomial),

    /// Binary node over two shared operands
    Composite {
        op: BinaryOp,
        left: Function,
        right: Function,
    },
}

#[derive(Debug)]
struct Node {
    /// Unique ID for debugging (not used in equality comparisons)
    id: u64,
    kind: FunctionKind,
}

/// Placeholder swapped into composites while they are torn down
static DUMMY_LEAF: LazyLock<Function> = LazyLock::new(|| Function {
    node: Arc::new(Node {
        id: 0,
        kind: FunctionKind::Constant(Constant::new(0.0)),
    }),
});

// Iterative drop: a long chain of composites would otherwise be freed
// recursively and overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        fn drain_children(kind: &mut FunctionKind, queue: &mut Vec<Function>) {
            if let FunctionKind::Composite { left, right, .. } = kind {
                queue.push(std::mem::replace(left, DUMMY_LEAF.clone()));
                queue.push(std::mem::replace(right, DUMMY_LEAF.clone()));
            }
        }

        let mut work_queue = Vec::new();
        drain_children(&mut self.kind, &mut work_queue);

        // Only descend into children this node owned exclusively
        while let Some(child) = work_queue.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child.node) {
                drain_children(&mut node.kind, &mut work_queue);
            }
        }
    }
}

/// Shared, immutable handle to a function tree.
///
/// Cloning a `Function` bumps a reference count; the tree itself is never
/// copied. A node lives until the last handle or parent composite that
/// references it is dropped, so the same sub-function can take part in any
/// number of expressions.
///
/// # Example
/// ```ignore
/// use numfun::{Function, NumericFunction};
///
/// let x = Function::identity();
/// let two = Function::constant(2.0);
/// let sum = &two + &x;
/// assert_eq!(sum.evaluate(3.0), 5.0);
/// assert_eq!(sum.describe(), "(2.000000)+(x)");
/// ```
#[derive(Debug, Clone)]
pub struct Function {
    node: Arc<Node>,
}

impl Deref for Function {
    type Target = FunctionKind;

    fn deref(&self) -> &Self::Target {
        &self.node.kind
    }
}

// Structural equality: IDs are ignored
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.node.kind == other.node.kind
    }
}

impl Function {
    pub fn new(kind: FunctionKind) -> Self {
        Function {
            node: Arc::new(Node {
                id: next_id(),
                kind,
            }),
        }
    }

    /// Unique node ID
    pub fn id(&self) -> u64 {
        self.node.id
    }

    pub fn kind(&self) -> &FunctionKind {
        &self.node.kind
    }

    /// True when both handles point at the very same node
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Number of live handles to this node, parents included
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.node)
    }

    // Convenience constructors

    /// Create `f(x) = x`
    pub fn identity() -> Self {
        Function::new(FunctionKind::Identity(Identity))
    }

    /// Create `f(x) = c`
    pub fn constant(value: f64) -> Self {
        Function::new(FunctionKind::Constant(Constant::new(value)))
    }

    /// Create `f(x) = x^exponent`
    pub fn power(exponent: f64) -> Self {
        Function::new(FunctionKind::Power(Power::new(exponent)))
    }

    /// Create `f(x) = e^x`
    pub fn exp() -> Self {
        Function::new(FunctionKind::Exponential(Exponential))
    }

    /// Create a polynomial from coefficients, lowest degree first
    pub fn polynomial(coeffs: impl Into<Vec<f64>>) -> Self {
        Function::new(FunctionKind::Polynomial(Polynomial::new(coeffs)))
    }

    /// Create a composite node sharing both operands
    pub fn composite(op: BinaryOp, left: &Function, right: &Function) -> Self {
        Function::new(FunctionKind::Composite {
            op,
            left: left.clone(),
            right: right.clone(),
        })
    }

    // Accessors

    /// True for a composite node
    pub fn is_composite(&self) -> bool {
        matches!(self.kind(), FunctionKind::Composite { .. })
    }

    /// Operator and operands of a composite node
    pub fn as_composite(&self) -> Option<(BinaryOp, &Function, &Function)> {
        match self.kind() {
            FunctionKind::Composite { op, left, right } => Some((*op, left, right)),
            _ => None,
        }
    }

    // Analysis methods

    /// Count the total number of nodes in the tree
    ///
    /// A node shared by both sides of a composite is counted once per path.
    pub fn node_count(&self) -> usize {
        match self.kind() {
            FunctionKind::Composite { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
            _ => 1,
        }
    }

    /// Get the maximum nesting depth of the tree
    pub fn max_depth(&self) -> usize {
        match self.kind() {
            FunctionKind::Composite { left, right, .. } => {
                1 + left.max_depth().max(right.max_depth())
            }
            _ => 1,
        }
    }

    // Numeric methods

    /// Derivative estimate with a caller-chosen perturbation.
    ///
    /// Leaves ignore `eps` and return their exact derivative; composites use
    /// the forward difference of their own evaluation.
    pub fn derivative_with_step(&self, x: f64, eps: f64) -> f64 {
        match self.kind() {
            FunctionKind::Identity(f) => f.derivative(x),
            FunctionKind::Constant(f) => f.derivative(x),
            FunctionKind::Power(f) => f.derivative(x),
            FunctionKind::Exponential(f) => f.derivative(x),
            FunctionKind::Polynomial(f) => f.derivative(x),
            FunctionKind::Composite { .. } => {
                math::forward_difference(|t| self.evaluate(t), x, eps)
            }
        }
    }

    /// Evaluate at every point in order
    pub fn evaluate_many(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl NumericFunction for Function {
    fn evaluate(&self, x: f64) -> f64 {
        match self.kind() {
            FunctionKind::Identity(f) => f.evaluate(x),
            FunctionKind::Constant(f) => f.evaluate(x),
            FunctionKind::Power(f) => f.evaluate(x),
            FunctionKind::Exponential(f) => f.evaluate(x),
            FunctionKind::Polynomial(f) => f.evaluate(x),
            FunctionKind::Composite { op, left, right } => {
                op.apply(left.evaluate(x), right.evaluate(x))
            }
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        self.derivative_with_step(x, DERIVATIVE_EPSILON)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

// Leaf structs lift straight into handles

impl From<Identity> for Function {
    fn from(f: Identity) -> Self {
        Function::new(FunctionKind::Identity(f))
    }
}

impl From<Constant> for Function {
    fn from(f: Constant) -> Self {
        Function::new(FunctionKind::Constant(f))
    }
}

impl From<Power> for Function {
    fn from(f: Power) -> Self {
        Function::new(FunctionKind::Power(f))
    }
}

impl From<Exponential> for Function {
    fn from(f: Exponential) -> Self {
        Function::new(FunctionKind::Exponential(f))
    }
}

impl From<Polynomial> for Function {
    fn from(f: Polynomial) -> Self {
        Function::new(FunctionKind::Polynomial(f))
    }
}
