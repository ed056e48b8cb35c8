//! 8-bit processor emulator library.
//!
//! This crate implements a small 8-bit processor with a flat 64 KiB address space:
//! 1. **Core:** Four general registers, a flags byte, stack and instruction pointers.
//! 2. **ISA:** A 147-entry opcode table decoded through a data-driven lookup.
//! 3. **Memory:** A single flat memory bank shared by program, data and stack.
//! 4. **Simulation:** Image loader, step driver, trace sink, configuration and statistics.

/// Common types and constants (registers, memory map, errors).
pub mod common;
/// Emulator configuration (defaults and JSON deserialisation).
pub mod config;
/// CPU core (architectural state, execution engine, ALU).
pub mod core;
/// Instruction set (opcode constants, instruction model, decode table, disassembly).
pub mod isa;
/// Image loading, trace sinks and the step-loop simulator.
pub mod sim;
/// Flat memory bank.
pub mod soc;
/// Instruction-mix statistics collection and reporting.
pub mod stats;

/// Crate-wide error type; every fallible operation returns it.
pub use crate::common::{EmuError, Result};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, pointers and memory.
pub use crate::core::Cpu;
/// Per-step state snapshot handed to drivers.
pub use crate::core::cpu::Snapshot;
/// Step-loop driver that owns a CPU and a trace sink.
pub use crate::sim::simulator::{RunOutcome, Simulator};
