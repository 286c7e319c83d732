//! Instruction set.

use arith_ir::BinaryOp;

/// One-byte instruction opcodes.
///
/// Byte values are part of the encoded format and must not be renumbered.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Opcode {
    /// End of code. The single value left on the stack is the result.
    Halt = 0,
    Add = 1,
    Sub = 2,
    Mul = 3,
    Div = 4,
    /// Negate the top of the stack.
    Neg = 5,
    /// Push a constant. Operand: `u16` little-endian pool index.
    LoadConst = 6,
}

impl Opcode {
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Halt,
            1 => Self::Add,
            2 => Self::Sub,
            3 => Self::Mul,
            4 => Self::Div,
            5 => Self::Neg,
            6 => Self::LoadConst,
            _ => return None,
        })
    }

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "HALT",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Neg => "NEG",
            Self::LoadConst => "LOAD_CONST",
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> usize {
        match self {
            Self::LoadConst => 2,
            _ => 0,
        }
    }

    pub const fn from_binary(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Self::Add,
            BinaryOp::Sub => Self::Sub,
            BinaryOp::Mul => Self::Mul,
            BinaryOp::Div => Self::Div,
        }
    }
}
