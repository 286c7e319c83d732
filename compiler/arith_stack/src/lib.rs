//! Stack growth for the recursive expression-tree walks.
//!
//! `arith_eval::Evaluator`, `arith_fmt::Formatter` and
//! `arith_bytecode::Compiler` each visit a tree by recursing once per level:
//! `visit_binary` dispatches into both operands and `visit_unary` into its
//! single operand. A chain of a million `Neg` nodes, or a long left spine of
//! `Add`s built by folding a list, is an ordinary input for these walks, so
//! every `visit_binary`/`visit_unary` body runs inside
//! [`ensure_sufficient_stack`]. Leaf handlers (`visit_num`) never recurse and
//! are left unwrapped.
//!
//! Tree construction, `Drop`, `Expr::node_count` and `Expr::depth` are
//! iterative and do not need this crate. The VM runs flat code and does not
//! need it either.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` switches to a fresh heap-allocated segment
//!   when the current one runs low.
//! - **WASM targets**: plain call; the walks are then bounded by the engine's
//!   own stack.

/// Headroom a single walk step may use before the next segment is needed.
///
/// One `visit_binary` frame plus the dispatch into a child stays far below
/// this, so each guarded step can safely recurse one level.
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB), enough for a few thousand more
/// tree levels before the next switch.
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run one recursive walk step, switching to a new stack segment first if
/// less than [`RED_ZONE`] bytes remain.
///
/// Visitors wrap the body of each handler that dispatches into children:
///
/// ```text
/// fn visit_unary(&mut self, op: UnaryOp, node: &Unary) -> f64 {
///     ensure_sufficient_stack(|| op.apply(node.operand().dispatch(self)))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
