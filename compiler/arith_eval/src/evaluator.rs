//! Evaluator visitor.
//!
//! The result is threaded through return values, so an `Evaluator` carries
//! no state between calls and one instance can be reused freely.

use arith_ir::{Binary, BinaryOp, Expr, ExprVisitor, Unary, UnaryOp};
use arith_stack::ensure_sufficient_stack;

/// Computes the numeric value of an expression tree.
#[derive(Copy, Clone, Default, Debug)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluate `expr` to a number.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, expr: &Expr) -> f64 {
        let value = expr.dispatch(self);
        tracing::trace!(value, "evaluated");
        value
    }
}

impl ExprVisitor for Evaluator {
    type Output = f64;

    #[inline]
    fn visit_num(&mut self, value: f64) -> f64 {
        value
    }

    fn visit_binary(&mut self, op: BinaryOp, node: &Binary) -> f64 {
        eval_binary(self, op, node)
    }

    fn visit_unary(&mut self, op: UnaryOp, node: &Unary) -> f64 {
        eval_unary(self, op, node)
    }
}

/// Evaluate both operands of `node` through `visitor`, left first.
fn eval_binary<V>(visitor: &mut V, op: BinaryOp, node: &Binary) -> f64
where
    V: ExprVisitor<Output = f64> + ?Sized,
{
    ensure_sufficient_stack(|| {
        let (left, right) = node.dispatch_operands(visitor);
        op.apply(left, right)
    })
}

fn eval_unary<V>(visitor: &mut V, op: UnaryOp, node: &Unary) -> f64
where
    V: ExprVisitor<Output = f64> + ?Sized,
{
    ensure_sufficient_stack(|| op.apply(node.operand().dispatch(visitor)))
}

/// Evaluate `expr` with a fresh [`Evaluator`].
///
/// ```
/// use arith_ir::Expr;
///
/// let product = Expr::mul(Expr::neg(Expr::from(7.0)), Expr::neg(Expr::from(6.0)));
/// let expr = Expr::add(product, Expr::pos(Expr::from(10.0)));
/// assert_eq!(arith_eval::evaluate(&expr), 52.0);
/// ```
pub fn evaluate(expr: &Expr) -> f64 {
    Evaluator.eval(expr)
}

#[cfg(test)]
mod tests;
