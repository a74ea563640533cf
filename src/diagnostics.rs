//! Diagnostic reporting for evaluation
//!
//! This module provides the error types raised while loading and evaluating
//! trees, and the [`Reporter`] that presents them using miette.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::{BinaryOp, NodeKind};

/// Evaluation error
///
/// Every variant is fatal to the `evaluate` call that raised it.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    #[diagnostic(code(eval::division_by_zero))]
    DivisionByZero,

    #[error("Unknown binary operator `{op}`")]
    #[diagnostic(
        code(eval::unknown_operator),
        help("supported operators are + - * / = <> < <= > >=")
    )]
    UnknownOperator { op: BinaryOp },

    #[error("Empty sequence")]
    #[diagnostic(code(eval::empty_sequence))]
    EmptySequence,

    #[error("{kind} evaluation not implemented")]
    #[diagnostic(
        code(eval::unsupported),
        help(
            "only integer literals, binary operators, sequences and if-then-else can be evaluated"
        )
    )]
    Unsupported { kind: NodeKind },
}

/// Failure to obtain a tree to evaluate
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read `{name}`: {source}")]
    #[diagnostic(code(input::io))]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed expression tree: {0}")]
    #[diagnostic(
        code(input::json),
        help("the input must be a JSON-encoded expression, e.g. {{\"IntegerLiteral\": {{\"value\": 1}}}}")
    )]
    Json(#[from] serde_json::Error),
}

/// Error reporter that collects evaluation diagnostics for one source
pub struct Reporter {
    name: String,
    errors: Vec<EvalError>,
}

impl Reporter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            errors: Vec::new(),
        }
    }

    pub fn error(&mut self, error: EvalError) {
        tracing::debug!("{}: recorded `{}`", self.name, error);
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Name of the source the errors belong to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Print all diagnostics
    pub fn emit_all(&self) {
        for error in &self.errors {
            eprintln!(
                "{:?}",
                miette::Report::new(error.clone()).wrap_err(format!("while evaluating {}", self.name))
            );
        }
    }

    /// Consume and return errors
    pub fn into_errors(self) -> Vec<EvalError> {
        self.errors
    }

    /// Get errors by reference
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }
}
