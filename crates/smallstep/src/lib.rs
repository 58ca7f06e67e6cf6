//! # Smallstep
//!
//! A small-step reduction machine for arithmetic and boolean expression
//! trees.
//!
//! Expressions are immutable trees built from literals and binary
//! operators. They can be evaluated in one call, or reduced one rewrite
//! step at a time by a [`Machine`] that prints the intermediate tree after
//! every step.
//!
//! ## Architecture
//!
//! - **Expression model** ([`expr`]): variant types, constructors, rendering
//! - **Evaluation** ([`eval`]): the [`Reducible`] capability set
//! - **Machine** ([`machine`]): drives reduction to a terminal value
//!
//! ## Example
//!
//! ```
//! use smallstep::{Environment, Expr, Machine};
//!
//! let expr = Expr::add(Expr::multiply(1, 2), Expr::multiply(3, 4));
//! let mut machine = Machine::new(expr);
//!
//! let (lines, _env) = machine.trace(Environment::new()).unwrap();
//! assert_eq!(lines, ["1 * 2 + 3 * 4", "2 + 3 * 4", "2 + 12", "14"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod environment;
pub mod error;
pub mod eval;
pub mod expr;
pub mod machine;
pub mod value;

// Re-export main types
pub use environment::{Environment, DEFAULT_MAX_DEPTH};
pub use error::{EvalError, MachineError, Result};
pub use eval::Reducible;
pub use expr::{Add, Boolean, Expr, Multiply, Number};
pub use machine::Machine;
pub use value::Value;

/// Smallstep version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
