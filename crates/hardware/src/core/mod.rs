//! Core processor implementation.
//!
//! This module contains the processor state, the fetch-decode-execute engine
//! and the ALU it drives.

/// Architectural register state (general registers, flags).
pub mod arch;

/// CPU state aggregate and execution engine.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
