//! Evaluator integration tests
//!
//! Builds trees in code and checks the integer (or error) they evaluate to.

use tiger_eval::{BinaryOp, EvalError, Evaluator, Expr, NodeKind};

/// Helper to evaluate a tree with a fresh evaluator
fn eval(expr: &Expr) -> Result<i32, EvalError> {
    Evaluator::new().evaluate(expr)
}

/// Helper to check the result is an integer
fn assert_result_int(expr: Expr, expected: i32) {
    match eval(&expr) {
        Ok(n) => assert_eq!(n, expected, "Expected {}, got {}", expected, n),
        Err(e) => panic!("Evaluation failed: {}", e),
    }
}

/// Helper to check evaluation fails with the given error
fn assert_error(expr: Expr, expected: EvalError) {
    match eval(&expr) {
        Ok(n) => panic!("Expected error `{}`, got {}", expected, n),
        Err(e) => assert_eq!(e, expected),
    }
}

fn bin(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

fn int(n: i32) -> Expr {
    Expr::int(n)
}

// ==================== Literals ====================

#[test]
fn test_eval_literal_int() {
    assert_result_int(int(42), 42);
}

#[test]
fn test_eval_literal_extremes() {
    assert_result_int(int(i32::MAX), i32::MAX);
    assert_result_int(int(i32::MIN), i32::MIN);
    assert_result_int(int(0), 0);
}

// ==================== Arithmetic ====================

#[test]
fn test_eval_add() {
    assert_result_int(bin("+", int(2), int(3)), 5);
}

#[test]
fn test_eval_sub() {
    assert_result_int(bin("-", int(50), int(8)), 42);
}

#[test]
fn test_eval_mul() {
    assert_result_int(bin("*", int(6), int(7)), 42);
}

#[test]
fn test_eval_div() {
    assert_result_int(bin("/", int(84), int(2)), 42);
}

#[test]
fn test_eval_div_truncates_toward_zero() {
    assert_result_int(bin("/", int(-7), int(2)), -3);
    assert_result_int(bin("/", int(7), int(-2)), -3);
    assert_result_int(bin("/", int(-7), int(-2)), 3);
}

#[test]
fn test_eval_div_by_zero() {
    assert_error(bin("/", int(7), int(0)), EvalError::DivisionByZero);
}

#[test]
fn test_eval_zero_divided() {
    assert_result_int(bin("/", int(0), int(5)), 0);
}

#[test]
fn test_eval_arithmetic_complex() {
    // (2 + 3) * 8 + 2
    let expr = bin("+", bin("*", bin("+", int(2), int(3)), int(8)), int(2));
    assert_result_int(expr, 42);
}

#[test]
fn test_eval_overflow_wraps() {
    assert_result_int(bin("+", int(i32::MAX), int(1)), i32::MIN);
    assert_result_int(bin("-", int(i32::MIN), int(1)), i32::MAX);
    assert_result_int(bin("*", int(65536), int(65536)), 0);
    assert_result_int(bin("/", int(i32::MIN), int(-1)), i32::MIN);
}

// ==================== Comparisons ====================

#[test]
fn test_eval_equal() {
    assert_result_int(bin("=", int(4), int(4)), 1);
    assert_result_int(bin("=", int(4), int(5)), 0);
}

#[test]
fn test_eval_not_equal() {
    assert_result_int(bin("<>", int(4), int(5)), 1);
    assert_result_int(bin("<>", int(4), int(4)), 0);
}

#[test]
fn test_eval_ordering() {
    assert_result_int(bin("<", int(-1), int(0)), 1);
    assert_result_int(bin("<", int(0), int(0)), 0);
    assert_result_int(bin("<=", int(0), int(0)), 1);
    assert_result_int(bin("<=", int(1), int(0)), 0);
    assert_result_int(bin(">", int(1), int(0)), 1);
    assert_result_int(bin(">", int(i32::MIN), int(i32::MAX)), 0);
    assert_result_int(bin(">=", int(3), int(3)), 1);
    assert_result_int(bin(">=", int(2), int(3)), 0);
}

#[test]
fn test_eval_comparison_feeds_arithmetic() {
    // (1 < 2) + (3 = 3) + (5 > 9)
    let expr = bin(
        "+",
        bin("+", bin("<", int(1), int(2)), bin("=", int(3), int(3))),
        bin(">", int(5), int(9)),
    );
    assert_result_int(expr, 2);
}

// ==================== Unknown operators ====================

#[test]
fn test_eval_unknown_operator() {
    assert_error(
        bin("%", int(7), int(2)),
        EvalError::UnknownOperator {
            op: BinaryOp::Other("%".to_string()),
        },
    );
}

#[test]
fn test_eval_unknown_operator_after_operands() {
    // Operands are evaluated before the tag is examined.
    assert_error(
        bin("&", bin("/", int(1), int(0)), int(2)),
        EvalError::DivisionByZero,
    );
}

// ==================== Sequences ====================

#[test]
fn test_eval_sequence_returns_last() {
    assert_result_int(Expr::seq(vec![int(1), int(2), int(3)]), 3);
}

#[test]
fn test_eval_sequence_single() {
    assert_result_int(Expr::seq(vec![int(9)]), 9);
}

#[test]
fn test_eval_empty_sequence() {
    assert_error(Expr::seq(vec![]), EvalError::EmptySequence);
}

#[test]
fn test_eval_sequence_evaluates_earlier_items() {
    let expr = Expr::seq(vec![bin("/", int(1), int(0)), int(2)]);
    assert_error(expr, EvalError::DivisionByZero);
}

#[test]
fn test_eval_sequence_stops_at_first_error() {
    let expr = Expr::seq(vec![
        int(1),
        Expr::seq(vec![]),
        bin("/", int(1), int(0)),
    ]);
    assert_error(expr, EvalError::EmptySequence);
}

#[test]
fn test_eval_nested_sequences() {
    let expr = Expr::seq(vec![int(1), Expr::seq(vec![int(2), int(3)])]);
    assert_result_int(expr, 3);
}

// ==================== Conditionals ====================

#[test]
fn test_eval_if_false_takes_else() {
    assert_result_int(Expr::if_then_else(int(0), int(10), int(20)), 20);
}

#[test]
fn test_eval_if_true_takes_then() {
    assert_result_int(Expr::if_then_else(int(1), int(10), int(20)), 10);
}

#[test]
fn test_eval_if_any_nonzero_is_truthy() {
    assert_result_int(Expr::if_then_else(int(-5), int(10), int(20)), 10);
    assert_result_int(Expr::if_then_else(int(i32::MIN), int(10), int(20)), 10);
}

#[test]
fn test_eval_if_skips_failing_else() {
    let expr = Expr::if_then_else(int(1), int(10), bin("/", int(1), int(0)));
    assert_result_int(expr, 10);
}

#[test]
fn test_eval_if_skips_failing_then() {
    let expr = Expr::if_then_else(int(0), Expr::seq(vec![]), int(20));
    assert_result_int(expr, 20);
}

#[test]
fn test_eval_if_condition_error() {
    let expr = Expr::if_then_else(bin("/", int(1), int(0)), int(10), int(20));
    assert_error(expr, EvalError::DivisionByZero);
}

#[test]
fn test_eval_if_with_comparison() {
    // if 3 < 4 then 100 else 200
    let expr = Expr::if_then_else(bin("<", int(3), int(4)), int(100), int(200));
    assert_result_int(expr, 100);
}

#[test]
fn test_eval_nested_if() {
    // if 0 then 1 else if 2 = 2 then 3 else 4
    let expr = Expr::if_then_else(
        int(0),
        int(1),
        Expr::if_then_else(bin("=", int(2), int(2)), int(3), int(4)),
    );
    assert_result_int(expr, 3);
}

// ==================== Error propagation ====================

#[test]
fn test_eval_deep_error_aborts_everything() {
    // 1 + (2 * (3 / 0))
    let expr = bin("+", int(1), bin("*", int(2), bin("/", int(3), int(0))));
    assert_error(expr, EvalError::DivisionByZero);
}

#[test]
fn test_eval_left_error_wins() {
    let expr = bin("+", Expr::seq(vec![]), bin("/", int(1), int(0)));
    assert_error(expr, EvalError::EmptySequence);

    let expr = bin("+", bin("/", int(1), int(0)), Expr::ident("x"));
    assert_error(expr, EvalError::DivisionByZero);
}

#[test]
fn test_eval_right_error_after_left_ok() {
    let expr = bin("-", int(1), Expr::string("s"));
    assert_error(
        expr,
        EvalError::Unsupported {
            kind: NodeKind::StringLiteral,
        },
    );
}

#[test]
fn test_evaluator_is_reusable() {
    let evaluator = Evaluator::default();
    assert_eq!(evaluator.evaluate(&bin("/", int(1), int(0))), Err(EvalError::DivisionByZero));
    assert_eq!(evaluator.evaluate(&bin("+", int(1), int(1))), Ok(2));
}

#[test]
fn test_evaluate_free_function() {
    assert_eq!(tiger_eval::evaluate(&bin("*", int(3), int(3))), Ok(9));
}
