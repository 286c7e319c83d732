//! Tree to bytecode lowering.
//!
//! A post-order walk: operands are emitted left then right, followed by the
//! operator, so the VM sees values in the order the evaluator computes them.
//! `+x` emits nothing, since it is the identity.

use arith_ir::{Binary, BinaryOp, Expr, ExprVisitor, Unary, UnaryOp};
use arith_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::errors::CompileError;
use crate::opcode::Opcode;
use crate::program::Program;

/// Maximum number of distinct constants a program can reference.
pub const MAX_CONSTANTS: usize = 1 << 16;

/// Lowers expression trees to a [`Program`].
///
/// The constant pool is deduplicated by bit pattern, so equal literals share
/// a slot while `0.0` and `-0.0` (or distinct NaN payloads) do not.
#[derive(Default)]
pub struct Compiler {
    constants: Vec<f64>,
    slots: FxHashMap<u64, u16>,
    code: Vec<u8>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `expr` into a complete program ending in `HALT`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn compile(mut self, expr: &Expr) -> Result<Program, CompileError> {
        expr.dispatch(&mut self)?;
        self.emit(Opcode::Halt);
        tracing::debug!(
            constants = self.constants.len(),
            code_len = self.code.len(),
            "compiled expression"
        );
        Ok(Program::new(self.constants, self.code))
    }

    fn emit(&mut self, op: Opcode) {
        self.code.push(op.as_byte());
    }

    fn constant_slot(&mut self, value: f64) -> Result<u16, CompileError> {
        let bits = value.to_bits();
        if let Some(&slot) = self.slots.get(&bits) {
            return Ok(slot);
        }
        let slot = u16::try_from(self.constants.len()).map_err(|_| {
            CompileError::TooManyConstants {
                limit: MAX_CONSTANTS,
            }
        })?;
        self.constants.push(value);
        self.slots.insert(bits, slot);
        Ok(slot)
    }
}

impl ExprVisitor for Compiler {
    type Output = Result<(), CompileError>;

    fn visit_num(&mut self, value: f64) -> Self::Output {
        let slot = self.constant_slot(value)?;
        self.emit(Opcode::LoadConst);
        self.code.extend_from_slice(&slot.to_le_bytes());
        Ok(())
    }

    fn visit_binary(&mut self, op: BinaryOp, node: &Binary) -> Self::Output {
        ensure_sufficient_stack(|| {
            node.left().dispatch(self)?;
            node.right().dispatch(self)?;
            self.emit(Opcode::from_binary(op));
            Ok(())
        })
    }

    fn visit_unary(&mut self, op: UnaryOp, node: &Unary) -> Self::Output {
        ensure_sufficient_stack(|| {
            node.operand().dispatch(self)?;
            if op == UnaryOp::Neg {
                self.emit(Opcode::Neg);
            }
            Ok(())
        })
    }
}

/// Compile `expr` with a fresh [`Compiler`].
pub fn compile(expr: &Expr) -> Result<Program, CompileError> {
    Compiler::new().compile(expr)
}
