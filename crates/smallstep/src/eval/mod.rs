//! Expression evaluation and single-step reduction

pub mod binary;
pub mod literal;

use crate::{Environment, Expr, Result, Value};

/// The capability set shared by every expression node.
///
/// Each node type implements this trait, and [`Expr`] dispatches to the
/// variant it wraps. A new kind of expression is a new node type with its
/// own implementation; the [`Machine`](crate::Machine) only ever talks to
/// this trait.
///
/// The environment is moved in and handed back by every operation.
pub trait Reducible {
    /// Fully evaluate this node to a terminal value.
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)>;

    /// Perform exactly one rewrite step.
    ///
    /// Terminal nodes return themselves unchanged.
    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)>;

    /// Whether a rewrite rule applies to this node.
    fn is_reducible(&self) -> bool;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Reducible for Expr {
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)> {
        match self {
            Expr::Number(n) => n.evaluate(env),
            Expr::Boolean(b) => b.evaluate(env),
            Expr::Add(a) => a.evaluate(env),
            Expr::Multiply(m) => m.evaluate(env),
        }
    }

    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)> {
        match self {
            Expr::Number(n) => n.reduce(env),
            Expr::Boolean(b) => b.reduce(env),
            Expr::Add(a) => a.reduce(env),
            Expr::Multiply(m) => m.reduce(env),
        }
    }

    fn is_reducible(&self) -> bool {
        match self {
            Expr::Number(n) => n.is_reducible(),
            Expr::Boolean(b) => b.is_reducible(),
            Expr::Add(a) => a.is_reducible(),
            Expr::Multiply(m) => m.is_reducible(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression in an empty environment (convenience wrapper).
pub fn eval_expr(expr: &Expr) -> Result<Value> {
    expr.evaluate(Environment::new()).map(|(value, _)| value)
}
