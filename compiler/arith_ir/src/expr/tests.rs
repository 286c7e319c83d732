use super::*;

/// `6 + 7 * 8 / 9 * 10 + 100`, nested the way the literal structure reads.
fn sample_long() -> Expr {
    Expr::add(
        Expr::add(
            Expr::num(6.0),
            Expr::mul(
                Expr::mul(Expr::num(7.0), Expr::div(Expr::num(8.0), Expr::num(9.0))),
                Expr::num(10.0),
            ),
        ),
        Expr::num(100.0),
    )
}

#[test]
fn test_constructors_pick_variant() {
    assert!(matches!(Expr::add(Expr::from(1.0), Expr::from(2.0)), Expr::Add(_)));
    assert!(matches!(Expr::sub(Expr::from(1.0), Expr::from(2.0)), Expr::Sub(_)));
    assert!(matches!(Expr::mul(Expr::from(1.0), Expr::from(2.0)), Expr::Mul(_)));
    assert!(matches!(Expr::div(Expr::from(1.0), Expr::from(2.0)), Expr::Div(_)));
    assert!(matches!(Expr::pos(Expr::from(1.0)), Expr::Pos(_)));
    assert!(matches!(Expr::neg(Expr::from(1.0)), Expr::Neg(_)));
    assert!(matches!(Expr::num(1.0), Expr::Num(v) if v == 1.0));
}

#[test]
fn test_generic_constructors_match_named_ones() {
    for op in BinaryOp::ALL {
        let built = Expr::binary(op, Expr::num(1.0), Expr::num(2.0));
        let (got, node) = built.as_binary().unwrap_or_else(|| panic!("{op:?} not binary"));
        assert_eq!(got, op);
        assert_eq!(node.left(), &Expr::num(1.0));
        assert_eq!(node.right(), &Expr::num(2.0));
    }
    assert_eq!(Expr::unary(UnaryOp::Neg, Expr::num(3.0)), Expr::neg(Expr::num(3.0)));
    assert_eq!(Expr::unary(UnaryOp::Pos, Expr::num(3.0)), Expr::pos(Expr::num(3.0)));
}

#[test]
fn test_accessors_return_children() {
    let expr = Expr::sub(Expr::num(4.0), Expr::neg(Expr::num(2.0)));
    let Some((BinaryOp::Sub, node)) = expr.as_binary() else {
        panic!("expected a subtraction, got {expr:?}");
    };
    assert_eq!(node.left(), &Expr::num(4.0));
    let Some((UnaryOp::Neg, inner)) = node.right().as_unary() else {
        panic!("expected a negation");
    };
    assert_eq!(inner.operand(), &Expr::num(2.0));
    assert!(expr.as_unary().is_none());
    assert!(Expr::num(1.0).as_binary().is_none());
}

#[test]
fn test_special_float_payloads_are_legal() {
    assert!(matches!(Expr::num(f64::NAN), Expr::Num(v) if v.is_nan()));
    assert_eq!(Expr::num(f64::INFINITY), Expr::Num(f64::INFINITY));
}

#[test]
fn test_node_count() {
    assert_eq!(Expr::num(1.0).node_count(), 1);
    assert_eq!(Expr::neg(Expr::num(1.0)).node_count(), 2);
    // 6 literals + 5 operators
    assert_eq!(sample_long().node_count(), 11);
}

#[test]
fn test_depth() {
    assert_eq!(Expr::num(1.0).depth(), 1);
    assert_eq!(Expr::pos(Expr::neg(Expr::num(1.0))).depth(), 3);
    // add -> add -> mul -> mul -> div -> num
    assert_eq!(sample_long().depth(), 6);
}

#[test]
fn test_clone_is_structurally_equal() {
    let original = sample_long();
    let copy = original.clone();
    assert_eq!(original, copy);
    drop(original);
    assert_eq!(copy.node_count(), 11);
}

#[test]
fn test_deep_tree_drops_without_overflow() {
    // Recursive teardown of this many boxes would overflow a typical 8MB stack
    let mut expr = Expr::num(1.0);
    for _ in 0..1_000_000 {
        expr = Expr::neg(expr);
    }
    assert_eq!(expr.depth(), 1_000_001);
    drop(expr);
}

#[test]
fn test_deep_left_spine_drops_without_overflow() {
    let mut expr = Expr::num(0.0);
    for i in 0..500_000 {
        expr = Expr::add(expr, Expr::num(f64::from(i)));
    }
    assert_eq!(expr.node_count(), 1_000_001);
    drop(expr);
}
