//! Literal evaluation
//!
//! Literals are terminal: evaluation yields their payload and reduction
//! yields the literal itself.

use crate::expr::{Boolean, Number};
use crate::{Environment, Expr, Result, Value};

use super::Reducible;

impl Reducible for Number {
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)> {
        Ok((Value::Number(self.value), env))
    }

    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)> {
        Ok((Expr::Number(*self), env))
    }

    fn is_reducible(&self) -> bool {
        false
    }
}

impl Reducible for Boolean {
    fn evaluate(&self, env: Environment) -> Result<(Value, Environment)> {
        Ok((Value::Boolean(self.value), env))
    }

    fn reduce(&self, env: Environment) -> Result<(Expr, Environment)> {
        Ok((Expr::Boolean(*self), env))
    }

    fn is_reducible(&self) -> bool {
        false
    }
}
