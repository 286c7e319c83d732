//! Expression Visitor
//!
//! Double dispatch over the closed node set. An operation over the tree is a
//! type implementing [`ExprVisitor`]; [`Expr::dispatch`] selects the handler
//! for the node's exact variant with an exhaustive `match`.
//!
//! # Design
//!
//! There is one `visit_*` handler per variant. The per-operator handlers have
//! default implementations that forward to [`ExprVisitor::visit_binary`] or
//! [`ExprVisitor::visit_unary`] with the matching operator tag, so a visitor
//! that treats all binary operators alike only writes three methods. Override
//! a per-operator handler to special-case it.
//!
//! # Example
//!
//! ```
//! use arith_ir::{Binary, BinaryOp, Expr, ExprVisitor, Unary, UnaryOp};
//!
//! struct CountLiterals;
//!
//! impl ExprVisitor for CountLiterals {
//!     type Output = usize;
//!
//!     fn visit_num(&mut self, _value: f64) -> usize {
//!         1
//!     }
//!
//!     fn visit_binary(&mut self, _op: BinaryOp, node: &Binary) -> usize {
//!         let (left, right) = node.dispatch_operands(self);
//!         left + right
//!     }
//!
//!     fn visit_unary(&mut self, _op: UnaryOp, node: &Unary) -> usize {
//!         node.operand().dispatch(self)
//!     }
//! }
//!
//! let expr = Expr::add(Expr::num(1.0), Expr::neg(Expr::num(2.0)));
//! assert_eq!(expr.dispatch(&mut CountLiterals), 2);
//! ```
//!
//! [`Expr::dispatch`]: crate::Expr::dispatch

use crate::expr::{Binary, Unary};
use crate::operators::{BinaryOp, UnaryOp};

/// Per-variant handlers for an operation over the expression tree.
///
/// Handlers receive the node payload itself. Recursion is the visitor's
/// responsibility: call [`Expr::dispatch`](crate::Expr::dispatch) on children,
/// or [`Binary::dispatch_operands`] to visit both operands left first.
pub trait ExprVisitor {
    /// Result produced for each visited node.
    type Output;

    /// Visit a numeric literal.
    fn visit_num(&mut self, value: f64) -> Self::Output;

    /// Shared handler for binary operators that are not overridden.
    fn visit_binary(&mut self, op: BinaryOp, node: &Binary) -> Self::Output;

    /// Shared handler for unary operators that are not overridden.
    fn visit_unary(&mut self, op: UnaryOp, node: &Unary) -> Self::Output;

    /// Visit `left + right`.
    fn visit_add(&mut self, node: &Binary) -> Self::Output {
        self.visit_binary(BinaryOp::Add, node)
    }

    /// Visit `left - right`.
    fn visit_sub(&mut self, node: &Binary) -> Self::Output {
        self.visit_binary(BinaryOp::Sub, node)
    }

    /// Visit `left * right`.
    fn visit_mul(&mut self, node: &Binary) -> Self::Output {
        self.visit_binary(BinaryOp::Mul, node)
    }

    /// Visit `left / right`.
    fn visit_div(&mut self, node: &Binary) -> Self::Output {
        self.visit_binary(BinaryOp::Div, node)
    }

    /// Visit `+operand`.
    fn visit_pos(&mut self, node: &Unary) -> Self::Output {
        self.visit_unary(UnaryOp::Pos, node)
    }

    /// Visit `-operand`.
    fn visit_neg(&mut self, node: &Unary) -> Self::Output {
        self.visit_unary(UnaryOp::Neg, node)
    }
}
