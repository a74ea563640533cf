//! Tree-walking evaluator

use crate::ast::*;
use crate::diagnostics::EvalError;

use super::stack::ensure_sufficient_stack;

/// Tree-walking evaluator
///
/// Holds no state: a single value can evaluate any number of trees, and each
/// call only borrows the tree for its own duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluate an expression to its integer value
    ///
    /// The first error met during the depth-first traversal aborts the whole
    /// evaluation and is returned as-is.
    pub fn evaluate(&self, expr: &Expr) -> Result<i32, EvalError> {
        ensure_sufficient_stack(|| self.eval_expr(expr))
    }

    fn eval_expr(&self, expr: &Expr) -> Result<i32, EvalError> {
        tracing::trace!("evaluating {}", expr.kind());

        match expr {
            Expr::IntegerLiteral(lit) => Ok(lit.value),

            Expr::BinaryOperator(bin) => {
                let lhs = self.evaluate(&bin.left)?;
                let rhs = self.evaluate(&bin.right)?;
                eval_binary(&bin.op, lhs, rhs)
            }

            Expr::Sequence(seq) => self.eval_sequence(seq),

            Expr::IfThenElse(ite) => {
                if self.evaluate(&ite.condition)? != 0 {
                    self.evaluate(&ite.then_part)
                } else {
                    self.evaluate(&ite.else_part)
                }
            }

            Expr::StringLiteral(_) => Err(unsupported(NodeKind::StringLiteral)),
            Expr::Identifier(_) => Err(unsupported(NodeKind::Identifier)),
            Expr::Let(_) => Err(unsupported(NodeKind::Let)),
            Expr::VarDecl(_) => Err(unsupported(NodeKind::VarDecl)),
            Expr::FunDecl(_) => Err(unsupported(NodeKind::FunDecl)),
            Expr::FunCall(_) => Err(unsupported(NodeKind::FunCall)),
            Expr::WhileLoop(_) => Err(unsupported(NodeKind::WhileLoop)),
            Expr::ForLoop(_) => Err(unsupported(NodeKind::ForLoop)),
            Expr::Break(_) => Err(unsupported(NodeKind::Break)),
            Expr::Assign(_) => Err(unsupported(NodeKind::Assign)),
        }
    }

    /// Evaluate a sequence, keeping only the last value
    fn eval_sequence(&self, seq: &Sequence) -> Result<i32, EvalError> {
        let Some((last, init)) = seq.exprs.split_last() else {
            tracing::debug!("empty sequence");
            return Err(EvalError::EmptySequence);
        };

        for expr in init {
            self.evaluate(expr)?;
        }
        self.evaluate(last)
    }
}

/// Apply a binary operator to already evaluated operands
fn eval_binary(op: &BinaryOp, lhs: i32, rhs: i32) -> Result<i32, EvalError> {
    match op {
        BinaryOp::Add => Ok(lhs.wrapping_add(rhs)),
        BinaryOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinaryOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinaryOp::Div => {
            if rhs == 0 {
                tracing::debug!("division by zero: {} / 0", lhs);
                Err(EvalError::DivisionByZero)
            } else {
                // Truncates toward zero; i32::MIN / -1 wraps.
                Ok(lhs.wrapping_div(rhs))
            }
        }
        BinaryOp::Eq => Ok(i32::from(lhs == rhs)),
        BinaryOp::Ne => Ok(i32::from(lhs != rhs)),
        BinaryOp::Lt => Ok(i32::from(lhs < rhs)),
        BinaryOp::Le => Ok(i32::from(lhs <= rhs)),
        BinaryOp::Gt => Ok(i32::from(lhs > rhs)),
        BinaryOp::Ge => Ok(i32::from(lhs >= rhs)),
        BinaryOp::Other(_) => {
            tracing::debug!("unknown binary operator `{}`", op);
            Err(EvalError::UnknownOperator { op: op.clone() })
        }
    }
}

fn unsupported(kind: NodeKind) -> EvalError {
    tracing::debug!("{} cannot be evaluated", kind);
    EvalError::Unsupported { kind }
}
