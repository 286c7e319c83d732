//! Hand-built sample trees.

use arith_ir::Expr;

/// `6 + 7 * 8 / 9 * 10 + 100`
pub fn long_chain() -> Expr {
    let eight_ninths = Expr::div(Expr::num(8.0), Expr::num(9.0));
    let product = Expr::mul(Expr::mul(Expr::num(7.0), eight_ninths), Expr::num(10.0));
    Expr::add(Expr::add(Expr::num(6.0), product), Expr::num(100.0))
}

/// `(-7) * (-6) + (+10)`
pub fn signed_operands() -> Expr {
    let product = Expr::mul(Expr::neg(Expr::num(7.0)), Expr::neg(Expr::num(6.0)));
    Expr::add(product, Expr::pos(Expr::num(10.0)))
}

pub fn all() -> [Expr; 2] {
    [long_chain(), signed_operands()]
}

/// `<rendering> = <value>`
pub fn summary(expr: &Expr) -> String {
    format!("{} = {}", arith_fmt::format(expr), arith_eval::evaluate(expr))
}
