//! Binary arithmetic evaluation and reduction

use std::sync::Arc;

use log::trace;

use crate::expr::{Add, Multiply};
use crate::{Environment, EvalError, Expr, Result, Value};

use super::Reducible;

/// Shape shared by the arithmetic operators.
trait Arithmetic {
    /// Operator symbol, as rendered and reported in errors
    const SYMBOL: &'static str;

    fn operands(&self) -> (&Arc<Expr>, &Arc<Expr>);

    /// Build a node of the same kind from new operands.
    fn rebuild(left: Arc<Expr>, right: Arc<Expr>) -> Expr;

    /// Checked operation; `None` on overflow.
    fn apply(left: i64, right: i64) -> Option<i64>;
}

impl Arithmetic for Add {
    const SYMBOL: &'static str = "+";

    fn operands(&self) -> (&Arc<Expr>, &Arc<Expr>) {
        (&self.left, &self.right)
    }

    fn rebuild(left: Arc<Expr>, right: Arc<Expr>) -> Expr {
        Expr::Add(Add { left, right })
    }

    fn apply(left: i64, right: i64) -> Option<i64> {
        left.checked_add(right)
    }
}

impl Arithmetic for Multiply {
    const SYMBOL: &'static str = "*";

    fn operands(&self) -> (&Arc<Expr>, &Arc<Expr>) {
        (&self.left, &self.right)
    }

    fn rebuild(left: Arc<Expr>, right: Arc<Expr>) -> Expr {
        Expr::Multiply(Multiply { left, right })
    }

    fn apply(left: i64, right: i64) -> Option<i64> {
        left.checked_mul(right)
    }
}

impl Reducible for Add {
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)> {
        eval_arithmetic(self, env)
    }

    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)> {
        reduce_arithmetic(self, env)
    }

    fn is_reducible(&self) -> bool {
        true
    }
}

impl Reducible for Multiply {
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)> {
        eval_arithmetic(self, env)
    }

    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)> {
        reduce_arithmetic(self, env)
    }

    fn is_reducible(&self) -> bool {
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Shared Rules
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate both operands left to right, then apply the operator.
///
/// The nesting depth is checked once here, before descending.
fn eval_arithmetic<T: Arithmetic>(node: &T, env: Environment) -> Result<(Value, Environment)> {
    let (left, right) = node.operands();
    env.check_depth(1 + left.depth().max(right.depth()))?;
    apply_arithmetic(node, env)
}

fn apply_arithmetic<T: Arithmetic>(node: &T, env: Environment) -> Result<(Value, Environment)> {
    let (left, right) = node.operands();
    let (left_val, env) = eval_checked(left, env)?;
    let (right_val, env) = eval_checked(right, env)?;

    match (left_val, right_val) {
        (Value::Number(l), Value::Number(r)) => match T::apply(l, r) {
            Some(n) => Ok((Value::Number(n), env)),
            None => Err(EvalError::IntegerOverflow {
                op: T::SYMBOL,
                left: l,
                right: r,
            }),
        },
        (l, r) => Err(EvalError::TypeMismatch {
            op: T::SYMBOL,
            left: l.type_name(),
            right: r.type_name(),
        }),
    }
}

/// Evaluate an operand whose depth is already known to be within limits.
fn eval_checked(expr: &Expr, env: Environment) -> Result<(Value, Environment)> {
    match expr {
        Expr::Add(a) => apply_arithmetic(a, env),
        Expr::Multiply(m) => apply_arithmetic(m, env),
        literal => literal.evaluate(env),
    }
}

/// One rewrite step, left operand first.
///
/// A reducible operand is collapsed to its fully evaluated value in a
/// single step. Once both operands are terminal the whole node collapses.
fn reduce_arithmetic<T: Arithmetic>(node: &T, env: Environment) -> Result<(Expr, Environment)> {
    let (left, right) = node.operands();

    if left.is_reducible() {
        trace!("`{}`: collapsing left operand `{}`", T::SYMBOL, left);
        let (value, env) = left.evaluate(env)?;
        Ok((T::rebuild(Arc::new(value.into()), Arc::clone(right)), env))
    } else if right.is_reducible() {
        trace!("`{}`: collapsing right operand `{}`", T::SYMBOL, right);
        let (value, env) = right.evaluate(env)?;
        Ok((T::rebuild(Arc::clone(left), Arc::new(value.into())), env))
    } else {
        trace!("`{}`: collapsing `{} {} {}`", T::SYMBOL, left, T::SYMBOL, right);
        let (value, env) = eval_arithmetic(node, env)?;
        Ok((value.into(), env))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_apply() {
        assert_eq!(<Add as Arithmetic>::apply(2, 3), Some(5));
        assert_eq!(<Multiply as Arithmetic>::apply(2, 3), Some(6));
        assert_eq!(<Add as Arithmetic>::apply(i64::MAX, 1), None);
        assert_eq!(<Multiply as Arithmetic>::apply(i64::MIN, -1), None);
    }

    #[test]
    fn test_reduce_right_operand_when_left_terminal() {
        let node = Add::new(1, Expr::multiply(2, 3));
        let (expr, _) = node.reduce(Environment::new()).unwrap();
        match &expr {
            Expr::Add(Add { left, right }) => {
                assert!(Arc::ptr_eq(left, &node.left));
                assert_eq!(**right, Expr::number(6));
            }
            other => panic!("expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_limit_checked_before_descending() {
        let node = Add::new(Expr::multiply(Expr::add(1, 2), 3), 4);
        let err = node.evaluate(Environment::with_max_depth(2)).unwrap_err();
        assert_eq!(err, EvalError::DepthLimitExceeded { depth: 3, max: 2 });

        let (value, _) = node.evaluate(Environment::with_max_depth(3)).unwrap();
        assert_eq!(value, Value::Number(13));
    }

    #[test]
    fn test_overflow_is_reported() {
        let node = Multiply::new(i64::MAX, 2);
        let err = node.evaluate(Environment::new()).unwrap_err();
        assert_eq!(
            err,
            EvalError::IntegerOverflow {
                op: "*",
                left: i64::MAX,
                right: 2,
            }
        );
    }
}
