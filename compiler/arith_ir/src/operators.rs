//! Binary and Unary Operators
//!
//! Operator tags for the expression tree. The tree itself stores one enum
//! variant per operator; these tags let consumers that treat all binary (or
//! all unary) nodes alike share a single code path.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// All binary operators, in declaration order.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the infix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Apply the operator with native `f64` semantics.
    ///
    /// Division by zero yields an infinity or NaN; it is not an error.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Unary (prefix) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Pos,
    Neg,
}

impl UnaryOp {
    /// All unary operators, in declaration order.
    pub const ALL: [UnaryOp; 2] = [Self::Pos, Self::Neg];

    /// Returns the prefix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Pos => "+",
            Self::Neg => "-",
        }
    }

    /// Apply the operator with native `f64` semantics.
    ///
    /// `Pos` is the identity, so the sign of `-0.0` is preserved.
    #[inline]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Pos => operand,
            Self::Neg => -operand,
        }
    }
}
