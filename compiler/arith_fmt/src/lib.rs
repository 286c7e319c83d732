//! Arith Formatter
//!
//! Renders an expression tree as infix text for display.
//!
//! The rendering mirrors the literal tree structure: binary operators are
//! written `left op right` with single spaces, unary operators are written
//! as a prefix with no space, and parentheses are never inserted. The output
//! is therefore ambiguous with respect to precedence and is not meant to be
//! parsed back.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction the formatter writes into
//! - [`formatter`]: The rendering visitor

pub mod emitter;
pub mod formatter;

pub use emitter::{Emitter, StringEmitter};
pub use formatter::{format, format_into, Formatter};
