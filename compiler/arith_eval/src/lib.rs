//! Arith Eval - numeric evaluation of expression trees.
//!
//! A single depth-first pass computes the `f64` value of a tree. Operators
//! use native floating-point semantics: division by zero produces an infinity
//! or NaN, never an error, so evaluation is total.
//!
//! Binary operands are always evaluated left before right.

mod evaluator;

pub use evaluator::{evaluate, Evaluator};
