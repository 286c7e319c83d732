//! Expression Types
//!
//! Owned expression tree: a node is either a numeric literal or an operator
//! applied to one or two subexpressions.
//!
//! # Ownership
//!
//! Children are `Box<Expr>` owned by exactly one parent, and a parent can only
//! be built from fully constructed children. Dropping the root releases the
//! whole tree with an explicit work list rather than recursion, so tall trees
//! tear down in constant stack space.

use std::mem;

use crate::operators::{BinaryOp, UnaryOp};
use crate::visitor::ExprVisitor;

/// Expression node.
///
/// One variant per operator. Binary variants share the [`Binary`] payload and
/// unary variants share [`Unary`], so a visitor handler receives the node
/// itself while still knowing its exact variant.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// Numeric literal. Any `f64`, including NaN and the infinities.
    Num(f64),
    /// `left + right`
    Add(Binary),
    /// `left - right`
    Sub(Binary),
    /// `left * right`
    Mul(Binary),
    /// `left / right`
    Div(Binary),
    /// `+operand`
    Pos(Unary),
    /// `-operand`
    Neg(Unary),
}

/// Payload of a binary node: two exclusively owned operands.
#[derive(Clone, PartialEq, Debug)]
pub struct Binary {
    left: Box<Expr>,
    right: Box<Expr>,
}

impl Binary {
    pub fn new(left: Expr, right: Expr) -> Self {
        Binary {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expr {
        &self.right
    }

    /// Dispatch `visitor` on the left operand, then on the right operand.
    ///
    /// Every binary handler that needs both operand results should go through
    /// here so left-before-right order holds workspace-wide.
    pub fn dispatch_operands<V: ExprVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> (V::Output, V::Output) {
        let left = self.left.dispatch(visitor);
        let right = self.right.dispatch(visitor);
        (left, right)
    }
}

/// Payload of a unary node: one exclusively owned operand.
#[derive(Clone, PartialEq, Debug)]
pub struct Unary {
    operand: Box<Expr>,
}

impl Unary {
    pub fn new(operand: Expr) -> Self {
        Unary {
            operand: Box::new(operand),
        }
    }

    #[inline]
    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl Expr {
    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Binary::new(left, right))
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Expr::Sub(Binary::new(left, right))
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Binary::new(left, right))
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Expr::Div(Binary::new(left, right))
    }

    pub fn pos(operand: Expr) -> Self {
        Expr::Pos(Unary::new(operand))
    }

    pub fn neg(operand: Expr) -> Self {
        Expr::Neg(Unary::new(operand))
    }

    /// Build the binary node for `op`.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let node = Binary::new(left, right);
        match op {
            BinaryOp::Add => Expr::Add(node),
            BinaryOp::Sub => Expr::Sub(node),
            BinaryOp::Mul => Expr::Mul(node),
            BinaryOp::Div => Expr::Div(node),
        }
    }

    /// Build the unary node for `op`.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        let node = Unary::new(operand);
        match op {
            UnaryOp::Pos => Expr::Pos(node),
            UnaryOp::Neg => Expr::Neg(node),
        }
    }

    /// Invoke the handler of `visitor` that matches this node's variant.
    #[inline]
    pub fn dispatch<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Num(value) => visitor.visit_num(*value),
            Expr::Add(node) => visitor.visit_add(node),
            Expr::Sub(node) => visitor.visit_sub(node),
            Expr::Mul(node) => visitor.visit_mul(node),
            Expr::Div(node) => visitor.visit_div(node),
            Expr::Pos(node) => visitor.visit_pos(node),
            Expr::Neg(node) => visitor.visit_neg(node),
        }
    }

    /// Operator and payload, if this is a binary node.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Binary)> {
        match self {
            Expr::Add(node) => Some((BinaryOp::Add, node)),
            Expr::Sub(node) => Some((BinaryOp::Sub, node)),
            Expr::Mul(node) => Some((BinaryOp::Mul, node)),
            Expr::Div(node) => Some((BinaryOp::Div, node)),
            Expr::Num(_) | Expr::Pos(_) | Expr::Neg(_) => None,
        }
    }

    /// Operator and payload, if this is a unary node.
    pub fn as_unary(&self) -> Option<(UnaryOp, &Unary)> {
        match self {
            Expr::Pos(node) => Some((UnaryOp::Pos, node)),
            Expr::Neg(node) => Some((UnaryOp::Neg, node)),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Num(_))
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            count += 1;
            expr.push_children(&mut stack);
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path. A literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        let mut children = Vec::with_capacity(2);
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            expr.push_children(&mut children);
            stack.extend(children.drain(..).map(|child| (child, depth + 1)));
        }
        max
    }

    fn push_children<'a>(&'a self, out: &mut Vec<&'a Expr>) {
        if let Some((_, node)) = self.as_binary() {
            out.push(node.right());
            out.push(node.left());
        } else if let Some((_, node)) = self.as_unary() {
            out.push(node.operand());
        }
    }

    /// Move non-leaf children into `out`, leaving literals in their place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        fn detach(slot: &mut Expr, out: &mut Vec<Expr>) {
            if !slot.is_leaf() {
                out.push(mem::replace(slot, Expr::Num(0.0)));
            }
        }

        match self {
            Expr::Num(_) => {}
            Expr::Add(node) | Expr::Sub(node) | Expr::Mul(node) | Expr::Div(node) => {
                detach(&mut node.left, out);
                detach(&mut node.right, out);
            }
            Expr::Pos(node) | Expr::Neg(node) => detach(&mut node.operand, out),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Num(value)
    }
}

#[cfg(test)]
mod tests;
