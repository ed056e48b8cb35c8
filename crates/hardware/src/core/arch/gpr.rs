//! General-Purpose Register File.
//!
//! Holds the four 8-bit general registers `A`-`D`. Arithmetic on them wraps at
//! 8 bits; the register file itself only stores values.

use crate::common::Reg;

/// General-purpose register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; 4],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a general register to its slot. `F` has no slot here.
    #[inline(always)]
    const fn slot(reg: Reg) -> Option<usize> {
        match reg {
            Reg::A => Some(0),
            Reg::B => Some(1),
            Reg::C => Some(2),
            Reg::D => Some(3),
            Reg::F => None,
        }
    }

    /// Reads a general register.
    ///
    /// # Arguments
    ///
    /// * `reg` - One of `A`-`D`. The flags live in
    ///   [`crate::core::arch::flags::Flags`]; naming `F` here is a caller bug.
    ///   Debug builds panic on it, release builds read 0.
    pub fn read(&self, reg: Reg) -> u8 {
        debug_assert!(reg.is_general(), "{reg} is not a general register");
        Self::slot(reg).map_or(0, |i| self.regs[i])
    }

    /// Writes a general register.
    ///
    /// Debug builds panic when `reg` is `F`; release builds drop the write.
    pub fn write(&mut self, reg: Reg, val: u8) {
        debug_assert!(reg.is_general(), "{reg} is not a general register");
        if let Some(i) = Self::slot(reg) {
            self.regs[i] = val;
        }
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; 4];
    }

    /// Dumps the register file to stdout.
    pub fn dump(&self) {
        for reg in Reg::GENERAL {
            println!("{reg}={:#04x}", self.read(reg));
        }
    }
}
