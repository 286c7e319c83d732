//! Stack virtual machine.

use arith_ir::BinaryOp;

use crate::errors::VmError;
use crate::opcode::Opcode;
use crate::program::Program;

/// Executes programs over a value stack.
///
/// The stack is cleared at the start of every run, so a `Vm` can be reused
/// and keeps its allocation between runs.
#[derive(Default, Debug)]
pub struct Vm {
    stack: Vec<f64>,
}

impl Vm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `program` to `HALT` and return the single value left on the stack.
    #[tracing::instrument(level = "debug", skip_all, fields(code_len = program.code().len()))]
    pub fn run(&mut self, program: &Program) -> Result<f64, VmError> {
        self.stack.clear();
        let code = program.code();
        let mut pc = 0;

        loop {
            let Some(&byte) = code.get(pc) else {
                return Err(VmError::MissingHalt { offset: pc });
            };
            let op = Opcode::from_byte(byte).ok_or(VmError::UnknownOpcode { byte, offset: pc })?;

            match op {
                Opcode::Halt => return self.finish(pc),
                Opcode::Add => self.binary(BinaryOp::Add, pc)?,
                Opcode::Sub => self.binary(BinaryOp::Sub, pc)?,
                Opcode::Mul => self.binary(BinaryOp::Mul, pc)?,
                Opcode::Div => self.binary(BinaryOp::Div, pc)?,
                Opcode::Neg => {
                    let value = self.pop(pc)?;
                    self.stack.push(-value);
                }
                Opcode::LoadConst => {
                    let index = read_u16(code, pc + 1)
                        .ok_or(VmError::TruncatedOperand { offset: pc })?;
                    let value = program
                        .constants()
                        .get(usize::from(index))
                        .copied()
                        .ok_or(VmError::ConstantOutOfRange { index, offset: pc })?;
                    self.stack.push(value);
                }
            }

            pc += 1 + op.operand_len();
        }
    }

    fn binary(&mut self, op: BinaryOp, offset: usize) -> Result<(), VmError> {
        let right = self.pop(offset)?;
        let left = self.pop(offset)?;
        self.stack.push(op.apply(left, right));
        Ok(())
    }

    fn pop(&mut self, offset: usize) -> Result<f64, VmError> {
        self.stack.pop().ok_or(VmError::StackUnderflow { offset })
    }

    fn finish(&self, offset: usize) -> Result<f64, VmError> {
        match self.stack.as_slice() {
            [value] => {
                tracing::trace!(value, "halted");
                Ok(*value)
            }
            stack => Err(VmError::UnbalancedStack {
                depth: stack.len(),
                offset,
            }),
        }
    }
}

/// Little-endian `u16` operand at `at`, if both bytes are present.
pub(crate) fn read_u16(code: &[u8], at: usize) -> Option<u16> {
    match code.get(at..at + 2)? {
        &[lo, hi] => Some(u16::from_le_bytes([lo, hi])),
        _ => None,
    }
}
