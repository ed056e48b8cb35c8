//! ALU arithmetic operations.
//!
//! Add-with-carry and subtract-with-borrow on 8-bit operands. Both fold the
//! incoming carry into every addressing mode and wrap modulo 256; carry-out is
//! not computed here (see [`super::set_result_flags`]).

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op`       - `Adc` or `Sbb`.
/// * `a`        - Destination register value before the operation.
/// * `b`        - Source operand.
/// * `carry_in` - Current carry flag as 0 or 1.
///
/// # Returns
///
/// The wrapped 8-bit result. Returns `a` unchanged for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8, carry_in: u8) -> u8 {
    match op {
        AluOp::Adc => a.wrapping_add(b).wrapping_add(carry_in),
        AluOp::Sbb => a.wrapping_sub(b).wrapping_sub(carry_in),
        AluOp::And | AluOp::Lor => a,
    }
}
