//! Arith Bytecode - a stack-machine backend for expression trees.
//!
//! # Architecture
//!
//! - [`compile`]: Post-order walk emitting a flat [`Program`]
//! - [`Vm`]: Iterative interpreter over a value stack
//! - [`disassemble`]: Human-readable listing of a program
//! - [`Program::to_bytes`] / [`Program::from_bytes`]: Byte codec
//!
//! Running a compiled program produces exactly the value the tree-walking
//! evaluator produces for the same tree, including signed zeros and NaN.
//! Execution itself does not recurse, so the VM handles programs of any
//! length in constant native stack.
//!
//! # Encoding
//!
//! Every instruction is one opcode byte; `LOAD_CONST` is followed by a
//! 2-byte little-endian index into the constant pool. Code ends with `HALT`.

mod compiler;
mod disassembler;
pub mod errors;
mod opcode;
mod program;
mod vm;

pub use compiler::{compile, Compiler, MAX_CONSTANTS};
pub use disassembler::{disassemble, Disassembly};
pub use errors::{BytecodeError, CompileError, DecodeError, EncodeError, VmError};
pub use opcode::Opcode;
pub use program::Program;
pub use vm::Vm;

use arith_ir::Expr;

/// Compile `expr` and run it on a fresh [`Vm`].
pub fn execute(expr: &Expr) -> Result<f64, BytecodeError> {
    let program = compile(expr)?;
    Ok(Vm::new().run(&program)?)
}
