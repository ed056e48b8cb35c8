//! Global System Constants.
//!
//! This module defines system-wide constants used across the emulator. It includes:
//! 1. **Memory Map:** Address space size and the data/program split.
//! 2. **Reset Values:** Initial stack and instruction pointers.
//! 3. **Flag Bits:** Positions of the named bits inside the flags register.

/// Size of the flat address space in bytes (64 KiB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Initial stack pointer. The stack grows downward through the low half of memory.
pub const INITIAL_SP: u16 = 0x7FFF;

/// Initial instruction pointer; execution always begins here.
pub const INITIAL_IP: u16 = 0x8000;

/// First address of the program region.
pub const PROGRAM_BASE: u16 = 0x8000;

/// Size of the program region in bytes (upper half of memory).
pub const PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_BASE as usize;

/// Zero flag: set when the last flag-affecting result was zero.
pub const FLAG_ZERO: u8 = 1 << 0;

/// Carry flag: set when the result is numerically below the register's prior value.
pub const FLAG_CARRY: u8 = 1 << 1;

/// Greater flag: set when bit 7 of the result is clear.
pub const FLAG_GREATER: u8 = 1 << 2;

/// Halt flag: terminal state of the run loop.
pub const FLAG_HALT: u8 = 1 << 3;

/// Sign bit of an 8-bit result.
pub const SIGN_BIT: u8 = 0x80;
