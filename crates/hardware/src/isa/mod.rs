//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode constants, the decoded instruction model and the
//! table-driven decoder for the 8-bit instruction set.
//!
//! # Instruction families
//!
//! * ALU: `ADC`, `SBB`, `AND`, `LOR` in register, immediate and memory forms.
//! * Unary: `NOT`, `ROL`, `ROR`.
//! * Transfer: `LDB`, `STB`, `MVB`, `DEREF`.
//! * Control: `JEZ`, `JGZ`, `JCS`, `BRK`, `NOP`.
//! * Stack: `PUSH`, `POP`.

/// Table-driven instruction decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Decoded instruction model and operand descriptors.
pub mod instruction;

/// Named opcode constants.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
