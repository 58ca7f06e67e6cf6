//! Name-to-expression context threaded through evaluation

use indexmap::IndexMap;

use crate::error::EvalError;
use crate::expr::Expr;

/// Default limit on how deeply composites may nest during evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// A mapping from names to expressions.
///
/// No expression variant reads from the environment yet. Every
/// evaluation operation takes it by value and hands it back, so it can
/// carry bindings once variables exist without changing any signature.
///
/// It also carries the evaluation depth limit: evaluating a composite
/// nested deeper than [`max_depth`](Self::max_depth) fails with
/// [`EvalError::DepthLimitExceeded`] instead of recursing.
///
/// # Example
///
/// ```
/// use smallstep::{Environment, Expr};
///
/// let env = Environment::new()
///     .with_binding("x", Expr::number(1))
///     .with_binding("y", Expr::boolean(true));
///
/// assert_eq!(env.get("x"), Some(&Expr::number(1)));
/// assert_eq!(env.len(), 2);
/// assert!(!env.contains("z"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, Expr>,

    /// Maximum nesting depth evaluation will descend into
    max_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an empty environment with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            bindings: IndexMap::new(),
            max_depth,
        }
    }

    /// The evaluation depth limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Check that an expression nested `depth` levels may be evaluated.
    pub fn check_depth(&self, depth: usize) -> Result<(), EvalError> {
        if depth > self.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }

    /// Bind `name` to `expr`, replacing any previous binding.
    ///
    /// Returns the previously bound expression, if any.
    pub fn define(&mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Option<Expr> {
        self.bindings.insert(name.into(), expr.into())
    }

    /// Consume the environment and return it with `name` bound to `expr`.
    pub fn with_binding(mut self, name: impl Into<String>, expr: impl Into<Expr>) -> Self {
        self.define(name, expr);
        self
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name)
    }

    /// Check whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Remove a binding, returning its expression.
    pub fn remove(&mut self, name: &str) -> Option<Expr> {
        self.bindings.shift_remove(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
