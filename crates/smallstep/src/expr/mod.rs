//! Expression tree representation

mod display;

use std::sync::{Arc, OnceLock};

use crate::value::Value;

/// Integer literal. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    /// The integer payload
    pub value: i64,
}

/// Boolean literal. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boolean {
    /// The boolean payload
    pub value: bool,
}

/// Addition of two operands.
///
/// Operands are shared, so a reduction step that rewrites one side keeps
/// the other side pointer-identical to the previous tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Add {
    /// Left operand
    pub left: Arc<Expr>,
    /// Right operand
    pub right: Arc<Expr>,
}

/// Multiplication of two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiply {
    /// Left operand
    pub left: Arc<Expr>,
    /// Right operand
    pub right: Arc<Expr>,
}

/// An immutable expression tree.
///
/// Each variant wraps a node type implementing
/// [`Reducible`](crate::Reducible); `Expr` dispatches to it.
///
/// # Example
///
/// ```
/// use smallstep::Expr;
///
/// let expr = Expr::add(Expr::multiply(1, 2), 3);
/// assert_eq!(expr.to_string(), "1 * 2 + 3");
/// assert_eq!(expr.composite_count(), 2);
/// assert_eq!(expr.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal
    Number(Number),
    /// Boolean literal
    Boolean(Boolean),
    /// `left + right`
    Add(Add),
    /// `left * right`
    Multiply(Multiply),
}

impl Number {
    /// Create an integer literal.
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Boolean {
    /// Create a boolean literal.
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Add {
    /// Create an addition node.
    pub fn new(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            left: Arc::new(left.into()),
            right: Arc::new(right.into()),
        }
    }
}

impl Multiply {
    /// Create a multiplication node.
    pub fn new(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            left: Arc::new(left.into()),
            right: Arc::new(right.into()),
        }
    }
}

impl Expr {
    // ═══════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════

    /// Integer literal.
    pub fn number(value: i64) -> Self {
        Expr::Number(Number::new(value))
    }

    /// Boolean literal.
    pub fn boolean(value: bool) -> Self {
        Expr::Boolean(Boolean::new(value))
    }

    /// `left + right`
    pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Add(Add::new(left, right))
    }

    /// `left * right`
    pub fn multiply(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Multiply(Multiply::new(left, right))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// The resolved value of a literal, or `None` for a composite.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expr::Number(n) => Some(Value::Number(n.value)),
            Expr::Boolean(b) => Some(Value::Boolean(b.value)),
            Expr::Add(_) | Expr::Multiply(_) => None,
        }
    }

    /// The operands of a composite, or `None` for a literal.
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Number(_) | Expr::Boolean(_) => None,
            Expr::Add(Add { left, right }) | Expr::Multiply(Multiply { left, right }) => {
                Some((&**left, &**right))
            }
        }
    }

    /// Number of composite (operator) nodes in the tree.
    ///
    /// Every reduction step strictly decreases this count.
    pub fn composite_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            if let Some((left, right)) = expr.operands() {
                count += 1;
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }

    /// Longest chain of nested composites from the root to a literal.
    ///
    /// A literal has depth 0 and `1 + 2` has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((expr, level)) = pending.pop() {
            match expr.operands() {
                Some((left, right)) => {
                    pending.push((left, level + 1));
                    pending.push((right, level + 1));
                }
                None => deepest = deepest.max(level),
            }
        }
        deepest
    }
}

// Uniquely owned composite operands are released from a worklist, so
// dropping a deep tree does not recurse.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_composites(self, &mut pending);
        while let Some(operand) = pending.pop() {
            if let Ok(mut expr) = Arc::try_unwrap(operand) {
                detach_composites(&mut expr, &mut pending);
            }
        }
    }
}

fn detach_composites(expr: &mut Expr, pending: &mut Vec<Arc<Expr>>) {
    if let Expr::Add(Add { left, right }) | Expr::Multiply(Multiply { left, right }) = expr {
        for operand in [left, right] {
            if operand.operands().is_some() {
                pending.push(std::mem::replace(operand, detached_leaf()));
            }
        }
    }
}

fn detached_leaf() -> Arc<Expr> {
    static LEAF: OnceLock<Arc<Expr>> = OnceLock::new();
    Arc::clone(LEAF.get_or_init(|| Arc::new(Expr::number(0))))
}

// ═══════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::number(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::number(i64::from(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::boolean(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Expr::number(n),
            Value::Boolean(b) => Expr::boolean(b),
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Number(n)
    }
}

impl From<Boolean> for Expr {
    fn from(b: Boolean) -> Self {
        Expr::Boolean(b)
    }
}

impl From<Add> for Expr {
    fn from(a: Add) -> Self {
        Expr::Add(a)
    }
}

impl From<Multiply> for Expr {
    fn from(m: Multiply) -> Self {
        Expr::Multiply(m)
    }
}
