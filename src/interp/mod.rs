//! Tree-walking evaluator for Tiger expressions
//!
//! Computes the 32-bit integer value of a tree built from literals, binary
//! operators, sequences and conditionals.

pub mod eval;
pub mod stack;

pub use eval::Evaluator;
pub use stack::ensure_sufficient_stack;
