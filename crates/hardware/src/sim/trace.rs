//! Instruction trace sinks.
//!
//! The simulator reports every decoded instruction to a [`TraceSink`]. The
//! sink is a diagnostic observer only; it cannot influence execution.

use crate::core::cpu::execution::Retired;
use crate::isa::instruction::Instruction;

/// One decoded-and-executed instruction, as seen by a trace sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the opcode was fetched from.
    pub address: u16,
    /// Opcode byte.
    pub opcode: u8,
    /// Decoded instruction.
    pub instruction: Instruction,
}

impl From<Retired> for TraceEvent {
    fn from(r: Retired) -> Self {
        Self {
            address: r.address,
            opcode: r.opcode,
            instruction: r.instruction,
        }
    }
}

/// Observer invoked once per executed instruction.
pub trait TraceSink {
    /// Called after the instruction has executed.
    fn on_instruction(&mut self, event: &TraceEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn on_instruction(&mut self, _event: &TraceEvent) {}
}

/// Emits a `tracing` event at `TRACE` level per instruction.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_instruction(&mut self, event: &TraceEvent) {
        tracing::trace!(
            "{:#06x}: ${:02X} {}",
            event.address,
            event.opcode,
            event.instruction
        );
    }
}
