//! ALU bitwise operations.
//!
//! Implements AND, OR and the unary complement on 8-bit operands.

use super::AluOp;

/// Executes a binary bitwise operation.
///
/// Returns `a` unchanged for non-logic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Lor => a | b,
        AluOp::Adc | AluOp::Sbb => a,
    }
}

/// Bitwise complement.
pub const fn not(a: u8) -> u8 {
    !a
}
