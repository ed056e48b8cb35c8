//! Flags Register.
//!
//! The flags register is a single byte whose low four bits carry the named
//! condition flags. It is exposed two ways:
//! 1. **Named bits:** Boolean accessors that read or write exactly one bit.
//! 2. **Raw byte:** Used by the move and stack instructions that name `F`
//!    directly; all eight bits, reserved ones included, pass through untouched.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{FLAG_CARRY, FLAG_GREATER, FLAG_HALT, FLAG_ZERO};

/// Processor flags packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Flags(u8);

impl Flags {
    /// Wraps a raw flags byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw flags byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Replaces the whole byte.
    pub const fn set_bits(&mut self, bits: u8) {
        self.0 = bits;
    }

    #[inline(always)]
    const fn get(self, mask: u8) -> bool {
        self.0 & mask != 0
    }

    #[inline(always)]
    const fn set(&mut self, mask: u8, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Zero flag.
    pub const fn zero(self) -> bool {
        self.get(FLAG_ZERO)
    }

    /// Sets or clears the zero flag.
    pub const fn set_zero(&mut self, on: bool) {
        self.set(FLAG_ZERO, on);
    }

    /// Carry flag.
    pub const fn carry(self) -> bool {
        self.get(FLAG_CARRY)
    }

    /// Sets or clears the carry flag.
    pub const fn set_carry(&mut self, on: bool) {
        self.set(FLAG_CARRY, on);
    }

    /// Greater flag.
    pub const fn greater(self) -> bool {
        self.get(FLAG_GREATER)
    }

    /// Sets or clears the greater flag.
    pub const fn set_greater(&mut self, on: bool) {
        self.set(FLAG_GREATER, on);
    }

    /// Halt flag.
    pub const fn halt(self) -> bool {
        self.get(FLAG_HALT)
    }

    /// Sets or clears the halt flag.
    pub const fn set_halt(&mut self, on: bool) {
        self.set(FLAG_HALT, on);
    }

    /// Carry as an arithmetic operand (0 or 1).
    pub const fn carry_in(self) -> u8 {
        self.carry() as u8
    }
}

impl fmt::Display for Flags {
    /// Renders set flags as letters and clear flags as `-`, e.g. `Z-G-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            letter(self.zero(), 'Z'),
            letter(self.carry(), 'C'),
            letter(self.greater(), 'G'),
            letter(self.halt(), 'H'),
        )
    }
}
