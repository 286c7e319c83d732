//! Arith IR - Expression Tree Types
//!
//! This crate contains the core data structures shared by every consumer:
//! - `Expr`: the closed set of expression nodes (literal, binary, unary)
//! - `BinaryOp` / `UnaryOp`: operator metadata and native float semantics
//! - `ExprVisitor`: per-variant handlers selected by `Expr::dispatch`
//!
//! # Design Philosophy
//!
//! - **Closed nodes, open operations**: the node set is a Rust enum and will
//!   not grow; new tree operations implement `ExprVisitor` in their own crate.
//! - **Exclusive ownership**: every child is a `Box<Expr>` owned by exactly one
//!   parent. No sharing, no cycles, deterministic teardown.
//! - **Read-only once built**: node fields are private; there are no `&mut`
//!   accessors.

mod expr;
mod operators;
pub mod visitor;

pub use expr::{Binary, Expr, Unary};
pub use operators::{BinaryOp, UnaryOp};
pub use visitor::ExprVisitor;
