//! Tiger expression evaluator
//!
//! Computes the 32-bit signed integer value of an already-built Tiger
//! expression tree. The supported subset is:
//! - Integer literals
//! - Binary operators `+ - * / = <> < <= > >=`
//! - Sequences `(e1; ...; en)`
//! - `if .. then .. else ..`
//!
//! Every other node kind (strings, identifiers, `let`, declarations, calls,
//! loops, `break`, assignment) is rejected with
//! [`EvalError::Unsupported`].
//!
//! # Architecture
//!
//! ```text
//! Tree builder (JSON, code) → Expr → Evaluator → i32 | EvalError → Reporter
//! ```
//!
//! # Example
//!
//! ```
//! use tiger_eval::{Expr, evaluate};
//!
//! let expr = Expr::binary("+", Expr::int(2), Expr::int(3));
//! assert_eq!(evaluate(&expr), Ok(5));
//! ```

pub mod ast;
pub mod diagnostics;
pub mod interp;

use serde::Deserialize;

pub use diagnostics::{EvalError, LoadError, Reporter};

pub use ast::{BinaryOp, Expr, NodeKind};
pub use interp::Evaluator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluate an expression tree
pub fn evaluate(expr: &Expr) -> Result<i32, EvalError> {
    Evaluator::new().evaluate(expr)
}

/// Decode a JSON-encoded expression tree
///
/// Nesting depth is unbounded, matching the evaluator.
pub fn parse_json(source: &str) -> Result<Expr, LoadError> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let expr = Expr::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    tracing::debug!("decoded {} tree", expr.kind());
    Ok(expr)
}

/// Decode a JSON-encoded expression tree and evaluate it
pub fn evaluate_json(source: &str) -> miette::Result<i32> {
    let expr = parse_json(source)?;
    Ok(evaluate(&expr)?)
}
