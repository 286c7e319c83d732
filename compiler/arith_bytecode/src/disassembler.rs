//! Program listing.
//!
//! ```text
//! constants: 2
//!   [0] 6
//!   [1] 7
//! code:
//!   0000 LOAD_CONST 0 (6)
//!   0003 LOAD_CONST 1 (7)
//!   0006 ADD
//!   0007 HALT
//! ```
//!
//! Malformed code is listed rather than rejected: unknown bytes are shown
//! and skipped, and a truncated operand ends the listing.

use std::fmt;

use crate::opcode::Opcode;
use crate::program::Program;
use crate::vm::read_u16;

/// Display adapter that lists a [`Program`].
pub struct Disassembly<'a> {
    program: &'a Program,
}

impl<'a> Disassembly<'a> {
    pub fn new(program: &'a Program) -> Self {
        Disassembly { program }
    }
}

impl fmt::Display for Disassembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constants = self.program.constants();
        writeln!(f, "constants: {}", constants.len())?;
        for (index, value) in constants.iter().enumerate() {
            writeln!(f, "  [{index}] {value}")?;
        }

        writeln!(f, "code:")?;
        let code = self.program.code();
        let mut pc = 0;
        while let Some(&byte) = code.get(pc) {
            write!(f, "  {pc:04}")?;
            let Some(op) = Opcode::from_byte(byte) else {
                writeln!(f, " <unknown {byte:#04x}>")?;
                pc += 1;
                continue;
            };
            write!(f, " {}", op.mnemonic())?;

            if op == Opcode::LoadConst {
                let Some(index) = read_u16(code, pc + 1) else {
                    writeln!(f, " <truncated>")?;
                    break;
                };
                match constants.get(usize::from(index)) {
                    Some(value) => write!(f, " {index} ({value})")?,
                    None => write!(f, " {index} (<out of range>)")?,
                }
            }

            writeln!(f)?;
            pc += 1 + op.operand_len();
        }
        Ok(())
    }
}

/// Render a listing of `program`.
pub fn disassemble(program: &Program) -> String {
    Disassembly::new(program).to_string()
}
