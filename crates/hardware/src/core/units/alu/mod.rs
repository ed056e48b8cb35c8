//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU used by the execution engine.
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Adc, Sbb
//! - [`logic`]:      And, Lor, Not
//! - [`shifts`]:     logical left/right
//!
//! # Flag rules
//!
//! The binary operations recompute three flags from the destination's new
//! value, comparing against the destination's value *before* the operation:
//!
//! * `Zero`    = result == 0
//! * `Carry`   = result < before (unsigned wraparound)
//! * `Greater` = bit 7 of result is clear
//!
//! `NOT` and the shifts update `Zero` only. `Halt` and the reserved bits are
//! never touched by the ALU.

/// Add-with-carry and subtract-with-borrow.
pub mod arithmetic;

/// Bitwise AND, OR and complement.
pub mod logic;

/// Logical shifts.
pub mod shifts;

use std::fmt;

use crate::common::constants::SIGN_BIT;
use crate::core::arch::Flags;
use crate::isa::instruction::ShiftDir;

/// Binary ALU operation, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Add with carry.
    Adc,
    /// Subtract with borrow.
    Sbb,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Lor,
}

impl AluOp {
    /// All operations in encoding order.
    pub const ALL: [Self; 4] = [Self::Adc, Self::Sbb, Self::And, Self::Lor];

    /// Mnemonic prefix.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Adc => "ADC",
            Self::Sbb => "SBB",
            Self::And => "AND",
            Self::Lor => "LOR",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a binary ALU operation and updates `Zero`, `Carry` and `Greater`.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation.
    /// * `a`     - Destination register value before the operation.
    /// * `b`     - Source operand.
    /// * `flags` - Flags register; its carry is consumed by `Adc`/`Sbb`.
    ///
    /// # Returns
    ///
    /// The new destination value.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu8_core::core::arch::Flags;
    /// use emu8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut flags = Flags::default();
    /// assert_eq!(Alu::execute(AluOp::Adc, 5, 3, &mut flags), 8);
    /// assert!(!flags.zero() && !flags.carry() && flags.greater());
    ///
    /// // 0xFF + 1 wraps to 0: zero and carry set.
    /// assert_eq!(Alu::execute(AluOp::Adc, 0xFF, 1, &mut flags), 0);
    /// assert!(flags.zero() && flags.carry());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8, flags: &mut Flags) -> u8 {
        let result = match op {
            AluOp::Adc | AluOp::Sbb => arithmetic::execute(op, a, b, flags.carry_in()),
            AluOp::And | AluOp::Lor => logic::execute(op, a, b),
        };
        set_result_flags(flags, a, result);
        result
    }

    /// Complements `a` and updates `Zero`.
    pub fn not(a: u8, flags: &mut Flags) -> u8 {
        let result = logic::not(a);
        set_zero_flag(flags, result);
        result
    }

    /// Shifts `a` by `count` and updates `Zero`.
    pub fn shift(dir: ShiftDir, a: u8, count: u8, flags: &mut Flags) -> u8 {
        let result = shifts::execute(dir, a, count);
        set_zero_flag(flags, result);
        result
    }
}

/// Recomputes `Zero`, `Carry` and `Greater` for a binary ALU result.
#[inline]
pub const fn set_result_flags(flags: &mut Flags, before: u8, result: u8) {
    flags.set_zero(result == 0);
    flags.set_carry(result < before);
    flags.set_greater(result & SIGN_BIT == 0);
}

/// Recomputes `Zero` only.
#[inline]
pub const fn set_zero_flag(flags: &mut Flags, result: u8) {
    flags.set_zero(result == 0);
}
