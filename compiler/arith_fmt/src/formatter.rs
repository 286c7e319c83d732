//! Formatter Core
//!
//! Depth-first rendering visitor. Each handler writes straight into the
//! emitter, so the whole tree is rendered in one pass with no intermediate
//! strings.

use arith_ir::{Binary, BinaryOp, Expr, ExprVisitor, Unary, UnaryOp};
use arith_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter};

/// Renders expression trees into an [`Emitter`].
///
/// Each top-level [`Formatter::format`] call starts from an empty buffer;
/// use [`format_into`] to append to existing output instead.
pub struct Formatter<E: Emitter = StringEmitter> {
    emitter: E,
}

impl Formatter<StringEmitter> {
    pub fn new() -> Self {
        Self::with_emitter(StringEmitter::new())
    }

    /// Render `expr` to a new string.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn format(&mut self, expr: &Expr) -> String {
        self.emitter = StringEmitter::new();
        self.render(expr);
        std::mem::take(&mut self.emitter).output()
    }
}

impl Default for Formatter<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> Formatter<E> {
    fn with_emitter(emitter: E) -> Self {
        Formatter { emitter }
    }

    fn render(&mut self, expr: &Expr) {
        expr.dispatch(self);
    }
}

impl<E: Emitter> ExprVisitor for Formatter<E> {
    type Output = ();

    fn visit_num(&mut self, value: f64) {
        self.emitter.emit_number(value);
    }

    fn visit_binary(&mut self, op: BinaryOp, node: &Binary) {
        ensure_sufficient_stack(|| {
            node.left().dispatch(self);
            self.emitter.emit_space();
            self.emitter.emit(op.as_symbol());
            self.emitter.emit_space();
            node.right().dispatch(self);
        });
    }

    fn visit_unary(&mut self, op: UnaryOp, node: &Unary) {
        ensure_sufficient_stack(|| {
            self.emitter.emit(op.as_symbol());
            node.operand().dispatch(self);
        });
    }
}

/// Render `expr` to a new string.
///
/// ```
/// use arith_ir::Expr;
///
/// let expr = Expr::mul(Expr::neg(Expr::from(7.0)), Expr::add(Expr::from(1.0), Expr::from(2.0)));
/// assert_eq!(arith_fmt::format(&expr), "-7 * 1 + 2");
/// ```
pub fn format(expr: &Expr) -> String {
    Formatter::new().format(expr)
}

/// Render `expr` at the end of `emitter`.
pub fn format_into<E: Emitter>(expr: &Expr, emitter: &mut E) {
    Formatter::with_emitter(emitter).render(expr);
}
