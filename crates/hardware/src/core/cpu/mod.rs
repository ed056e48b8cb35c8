//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of the processor:
//! 1. **Registers:** Four general registers and the flags byte.
//! 2. **Pointers:** The 16-bit stack and instruction pointers.
//! 3. **Memory:** The flat 64 KiB memory bank, owned exclusively by the CPU.
//! 4. **Diagnostics:** The last fetched opcode, kept for reporting.
//!
//! The state has no behaviour of its own beyond storage and reset; the
//! [`execution`] module mutates it one instruction at a time.

/// Instruction execution (the fetch-decode-execute step).
pub mod execution;

/// Fetch and stack primitives.
pub mod memory;

use std::fmt;

use serde::Serialize;

use crate::common::{INITIAL_IP, INITIAL_SP, Reg};
use crate::core::arch::{Flags, Gpr};
use crate::isa::disasm::disassemble;
use crate::soc::MemoryBank;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General registers `A`-`D`.
    pub regs: Gpr,
    /// Flags register.
    pub flags: Flags,
    /// Stack pointer. Push stores then decrements; pop increments then loads.
    pub sp: u16,
    /// Instruction pointer.
    pub ip: u16,
    /// Most recently fetched opcode.
    pub insn: u8,
    /// Flat memory.
    pub memory: MemoryBank,
}

impl Cpu {
    /// Creates a CPU in its reset state with zeroed memory.
    pub fn new() -> Self {
        Self {
            regs: Gpr::new(),
            flags: Flags::default(),
            sp: INITIAL_SP,
            ip: INITIAL_IP,
            insn: 0,
            memory: MemoryBank::new(),
        }
    }

    /// Resets registers, flags and pointers to their power-on values.
    ///
    /// Memory is left untouched; it is populated separately by the loader.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.flags = Flags::default();
        self.sp = INITIAL_SP;
        self.ip = INITIAL_IP;
        self.insn = 0;
        tracing::debug!(sp = self.sp, ip = self.ip, "cpu reset");
    }

    /// Reads a byte register. `F` yields the raw flags byte.
    pub fn read(&self, reg: Reg) -> u8 {
        match reg {
            Reg::F => self.flags.bits(),
            r => self.regs.read(r),
        }
    }

    /// Writes a byte register. `F` replaces the raw flags byte.
    pub fn write(&mut self, reg: Reg, val: u8) {
        match reg {
            Reg::F => self.flags.set_bits(val),
            r => self.regs.write(r, val),
        }
    }

    /// Returns `true` once the halt flag is set.
    pub const fn is_halted(&self) -> bool {
        self.flags.halt()
    }

    /// Captures the register, flag and pointer state for reporting.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            a: self.regs.read(Reg::A),
            b: self.regs.read(Reg::B),
            c: self.regs.read(Reg::C),
            d: self.regs.read(Reg::D),
            f: self.flags,
            sp: self.sp,
            ip: self.ip,
            insn: self.insn,
        }
    }

    /// Dumps the current CPU state to stdout.
    pub fn dump_state(&self) {
        println!("IP = {:#06x}  SP = {:#06x}  F = {}", self.ip, self.sp, self.flags);
        println!("at IP: {}", disassemble(&self.memory, self.ip));
        self.regs.dump();
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy of the architectural state after a step, handed to drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Register `A`.
    pub a: u8,
    /// Register `B`.
    pub b: u8,
    /// Register `C`.
    pub c: u8,
    /// Register `D`.
    pub d: u8,
    /// Flags register.
    pub f: Flags,
    /// Stack pointer.
    pub sp: u16,
    /// Instruction pointer.
    pub ip: u16,
    /// Most recently fetched opcode.
    pub insn: u8,
}

impl fmt::Display for Snapshot {
    /// One register per line, decimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A: {}", self.a)?;
        writeln!(f, "B: {}", self.b)?;
        writeln!(f, "C: {}", self.c)?;
        writeln!(f, "D: {}", self.d)?;
        writeln!(f, "F: {}", self.f.bits())?;
        writeln!(f, "SP: {}", self.sp)?;
        write!(f, "IP: {}", self.ip)
    }
}
