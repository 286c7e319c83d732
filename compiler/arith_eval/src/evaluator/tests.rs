use pretty_assertions::assert_eq;

use super::*;

fn n(value: f64) -> Expr {
    Expr::num(value)
}

#[test]
fn test_literal() {
    assert_eq!(evaluate(&n(6.0)), 6.0);
    assert_eq!(evaluate(&n(-2.5)), -2.5);
    assert_eq!(evaluate(&n(f64::INFINITY)), f64::INFINITY);
    assert!(evaluate(&n(f64::NAN)).is_nan());
}

#[test]
fn test_binary_operators() {
    assert_eq!(evaluate(&Expr::add(n(6.0), n(7.0))), 13.0);
    assert_eq!(evaluate(&Expr::sub(n(6.0), n(7.0))), -1.0);
    assert_eq!(evaluate(&Expr::mul(n(6.0), n(7.0))), 42.0);
    assert_eq!(evaluate(&Expr::div(n(7.0), n(2.0))), 3.5);
}

#[test]
fn test_unary_operators() {
    assert_eq!(evaluate(&Expr::pos(n(10.0))), 10.0);
    assert_eq!(evaluate(&Expr::neg(n(10.0))), -10.0);
    assert_eq!(evaluate(&Expr::neg(Expr::neg(n(3.0)))), 3.0);
}

#[test]
fn test_pos_is_identity_on_negative_zero() {
    assert!(evaluate(&Expr::pos(n(-0.0))).is_sign_negative());
    assert!(evaluate(&Expr::neg(n(0.0))).is_sign_negative());
}

#[test]
fn test_sample_long_chain() {
    let expr = Expr::add(
        Expr::add(
            n(6.0),
            Expr::mul(Expr::mul(n(7.0), Expr::div(n(8.0), n(9.0))), n(10.0)),
        ),
        n(100.0),
    );

    let value = evaluate(&expr);
    assert!((value - 168.222_222_222_222_23).abs() < 1e-9, "got {value}");
}

#[test]
fn test_sample_signed_operands() {
    let expr = Expr::add(
        Expr::mul(Expr::neg(n(7.0)), Expr::neg(n(6.0))),
        Expr::pos(n(10.0)),
    );
    assert_eq!(evaluate(&expr), 52.0);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(evaluate(&Expr::div(n(1.0), n(0.0))), f64::INFINITY);
    assert_eq!(evaluate(&Expr::div(n(-1.0), n(0.0))), f64::NEG_INFINITY);
    assert!(evaluate(&Expr::div(n(0.0), n(0.0))).is_nan());
}

#[test]
fn test_nan_propagates() {
    let expr = Expr::mul(Expr::div(n(0.0), n(0.0)), n(5.0));
    assert!(evaluate(&expr).is_nan());
}

#[test]
fn test_evaluator_is_reusable() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.eval(&Expr::add(n(1.0), n(2.0))), 3.0);
    // No accumulator leaks from the previous call
    assert_eq!(evaluator.eval(&n(5.0)), 5.0);
    assert_eq!(evaluator.eval(&Expr::neg(n(5.0))), -5.0);
}

#[test]
fn test_deep_unary_chain() {
    // 100k levels of recursion - would overflow a typical 8MB stack
    let mut expr = n(1.0);
    for _ in 0..100_000 {
        expr = Expr::neg(expr);
    }
    assert_eq!(evaluate(&expr), 1.0);
}

#[test]
fn test_deep_left_spine() {
    let mut expr = n(0.0);
    for _ in 0..100_000 {
        expr = Expr::add(expr, n(1.0));
    }
    assert_eq!(evaluate(&expr), 100_000.0);
}

/// Evaluates through the same operator steps as `Evaluator`, recording
/// each literal as it is reached.
struct LeafRecorder {
    inner: Evaluator,
    leaves: Vec<f64>,
}

impl ExprVisitor for LeafRecorder {
    type Output = f64;

    fn visit_num(&mut self, value: f64) -> f64 {
        self.leaves.push(value);
        self.inner.visit_num(value)
    }

    fn visit_binary(&mut self, op: BinaryOp, node: &Binary) -> f64 {
        eval_binary(self, op, node)
    }

    fn visit_unary(&mut self, op: UnaryOp, node: &Unary) -> f64 {
        eval_unary(self, op, node)
    }
}

#[test]
fn test_operands_evaluated_left_before_right() {
    let expr = Expr::div(
        Expr::sub(n(1.0), Expr::neg(n(2.0))),
        Expr::mul(n(3.0), Expr::add(n(4.0), n(5.0))),
    );

    let mut recorder = LeafRecorder {
        inner: Evaluator::new(),
        leaves: Vec::new(),
    };
    let value = expr.dispatch(&mut recorder);

    assert_eq!(recorder.leaves, [1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(value, evaluate(&expr));
    assert_eq!(value, 3.0 / 27.0);
}
