//! Execution units.
//!
//! The processor has a single functional unit, the 8-bit ALU.

/// Arithmetic Logic Unit for 8-bit integer operations.
pub mod alu;
