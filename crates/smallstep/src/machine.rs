//! The reduction machine
//!
//! A [`Machine`] owns the current expression and rewrites it one step at
//! a time until it is terminal, emitting the rendered tree before every
//! step and once more at the end.

use std::io::{self, Write};

use log::debug;

use crate::{Environment, Expr, MachineError, Reducible, Result};

/// Drives single-step reduction of an expression to a terminal value.
///
/// The environment is not owned by the machine; it is moved into each
/// call and handed back.
///
/// # Example
///
/// ```
/// use smallstep::{Environment, Expr, Machine};
///
/// let mut machine = Machine::new(Expr::add(1, Expr::multiply(2, 3)));
/// let mut out = Vec::new();
/// machine.run_with(Environment::new(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "1 + 2 * 3\n1 + 6\n7\n");
/// assert_eq!(machine.expression(), &Expr::number(7));
/// assert_eq!(machine.steps(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    expression: Expr,
    steps: usize,
}

impl Machine {
    /// Create a machine holding `expression`.
    pub fn new(expression: impl Into<Expr>) -> Self {
        Self {
            expression: expression.into(),
            steps: 0,
        }
    }

    /// The current expression.
    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    /// Consume the machine, returning the current expression.
    pub fn into_expression(self) -> Expr {
        self.expression
    }

    /// Number of steps performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Apply one reduction step to the current expression.
    ///
    /// On failure the current expression is left as it was.
    pub fn step(&mut self, env: Environment) -> Result<Environment, MachineError> {
        let (next, env) = self.expression.reduce(env)?;
        self.steps += 1;
        debug!("step {}: {} => {}", self.steps, self.expression, next);
        self.expression = next;
        Ok(env)
    }

    /// Reduce to a terminal value, printing each state to stdout.
    pub fn run(&mut self, env: Environment) -> Result<Environment, MachineError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(env, &mut out)
    }

    /// Reduce to a terminal value, writing each state as a line to `out`.
    pub fn run_with<W: Write>(
        &mut self,
        mut env: Environment,
        out: &mut W,
    ) -> Result<Environment, MachineError> {
        while self.expression.is_reducible() {
            writeln!(out, "{}", self.expression)?;
            env = self.step(env)?;
        }
        writeln!(out, "{}", self.expression)?;
        Ok(env)
    }

    /// Reduce to a terminal value, collecting each rendered state.
    pub fn trace(&mut self, env: Environment) -> Result<(Vec<String>, Environment), MachineError> {
        let mut buffer = Vec::new();
        let env = self.run_with(env, &mut buffer)?;
        let lines = String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_owned)
            .collect();
        Ok((lines, env))
    }
}
