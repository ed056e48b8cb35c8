//! Simulator: owns the CPU, the trace sink and the statistics side-by-side.
//!
//! The CPU knows nothing about tracing or counting; the simulator wraps each
//! step, reports the executed instruction to the sink and updates the stats.

use std::fmt;

use crate::common::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;
use crate::sim::trace::{LogSink, NullSink, TraceEvent, TraceSink};
use crate::stats::SimStats;

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The processor halted.
    Halted {
        /// Instructions executed during the run.
        steps: u64,
    },
    /// The step budget ran out before the processor halted.
    StepLimit {
        /// Instructions executed during the run.
        steps: u64,
    },
}

impl RunOutcome {
    /// Instructions executed during the run.
    pub const fn steps(self) -> u64 {
        match self {
            Self::Halted { steps } | Self::StepLimit { steps } => steps,
        }
    }
}

/// Top-level simulator.
pub struct Simulator {
    /// Processor state, memory included.
    pub cpu: Cpu,
    /// Instruction-mix counters.
    pub stats: SimStats,
    sink: Box<dyn TraceSink>,
}

impl Simulator {
    /// Creates a simulator around `cpu` that discards trace events.
    pub fn new(cpu: Cpu) -> Self {
        Self::with_sink(cpu, Box::new(NullSink))
    }

    /// Creates a simulator reporting to `sink`.
    pub fn with_sink(cpu: Cpu, sink: Box<dyn TraceSink>) -> Self {
        Self {
            cpu,
            stats: SimStats::default(),
            sink,
        }
    }

    /// Creates a simulator whose sink follows `config.general.trace_instructions`.
    pub fn from_config(cpu: Cpu, config: &Config) -> Self {
        if config.general.trace_instructions {
            Self::with_sink(cpu, Box::new(LogSink))
        } else {
            Self::new(cpu)
        }
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// `Ok(true)` while the processor keeps running, `Ok(false)` once halted.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::EmuError::IllegalOpcode`] from the CPU.
    pub fn step(&mut self) -> Result<bool> {
        if let Some(retired) = self.cpu.execute_next()? {
            // Jumps leave the flags alone, so the condition still reads as it did.
            let taken = match retired.instruction {
                Instruction::Jump(cond) => self.cpu.condition(cond),
                _ => false,
            };
            self.stats.record(retired.instruction, taken);
            self.sink.on_instruction(&TraceEvent::from(retired));
        }
        Ok(!self.cpu.is_halted())
    }

    /// Steps until the processor halts or `max_steps` instructions have run.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal opcode and returns it.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<RunOutcome> {
        self.run_with(max_steps, |_| {})
    }

    /// Like [`Simulator::run`], calling `on_step` after every executed
    /// instruction, the halting one included.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal opcode and returns it; `on_step` is not
    /// called for the rejected byte.
    pub fn run_with<F>(&mut self, max_steps: Option<u64>, mut on_step: F) -> Result<RunOutcome>
    where
        F: FnMut(&Self),
    {
        let mut steps = 0;
        while !self.cpu.is_halted() {
            if max_steps.is_some_and(|limit| steps >= limit) {
                tracing::warn!(steps, ip = self.cpu.ip, "step limit reached");
                return Ok(RunOutcome::StepLimit { steps });
            }
            let _ = self.step()?;
            steps += 1;
            on_step(self);
        }
        Ok(RunOutcome::Halted { steps })
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
