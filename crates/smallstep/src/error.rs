//! Error types for evaluation and machine execution

use thiserror::Error;

/// Errors raised while evaluating or reducing an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An arithmetic operator received a non-numeric operand
    #[error("Type mismatch: `{op}` expects number operands, got {left} and {right}")]
    TypeMismatch {
        /// Operator symbol
        op: &'static str,
        /// Type of the resolved left operand
        left: &'static str,
        /// Type of the resolved right operand
        right: &'static str,
    },

    /// Checked integer arithmetic overflowed
    #[error("Integer overflow: {left} {op} {right}")]
    IntegerOverflow {
        /// Operator symbol
        op: &'static str,
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },

    /// Composites nest deeper than the environment allows
    #[error("Depth limit exceeded: expression nests {depth} levels (max {max})")]
    DepthLimitExceeded {
        /// Nesting depth of the expression
        depth: usize,
        /// Configured limit
        max: usize,
    },
}

/// Errors raised by a [`Machine`](crate::Machine) run.
#[derive(Error, Debug)]
pub enum MachineError {
    /// A reduction step failed
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Writing a trace line failed
    #[error("Failed to write trace: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evaluation operations
pub type Result<T, E = EvalError> = std::result::Result<T, E>;
