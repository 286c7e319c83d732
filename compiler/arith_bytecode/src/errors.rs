//! Error types for compilation, execution and the byte codec.
//!
//! Every fault that can be traced to a position carries the byte offset of
//! the instruction (or input byte) where it was detected.

use thiserror::Error;

/// Failure to lower a tree into a [`Program`](crate::Program).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("expression needs more than {limit} distinct constants")]
    TooManyConstants { limit: usize },
}

/// Failure while executing a program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("unknown opcode {byte:#04x} at offset {offset}")]
    UnknownOpcode { byte: u8, offset: usize },

    #[error("stack underflow at offset {offset}")]
    StackUnderflow { offset: usize },

    #[error("constant index {index} out of range at offset {offset}")]
    ConstantOutOfRange { index: u16, offset: usize },

    #[error("truncated operand at offset {offset}")]
    TruncatedOperand { offset: usize },

    #[error("code ends at offset {offset} without HALT")]
    MissingHalt { offset: usize },

    #[error("HALT at offset {offset} with {depth} values on the stack, expected 1")]
    UnbalancedStack { depth: usize, offset: usize },
}

/// Failure to encode a program as bytes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{section} length {len} does not fit the u32 length field")]
    LengthOverflow { section: &'static str, len: usize },
}

/// Failure to decode a program from bytes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset}: needed {needed} more bytes")]
    Truncated { offset: usize, needed: usize },

    #[error("{count} trailing bytes after program at offset {offset}")]
    TrailingBytes { offset: usize, count: usize },
}

/// Any bytecode failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BytecodeError {
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("runtime error: {0}")]
    Vm(#[from] VmError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
