//! Simulation statistics collection and reporting.
//!
//! This module tracks what the emulator executed. It provides:
//! 1. **Totals:** Executed instruction count and host throughput.
//! 2. **Instruction mix:** Counts by class (ALU, transfer, jump, stack, system).
//! 3. **Jumps:** Taken and not-taken conditional jumps.
//!
//! There is no timing model; every instruction counts as one step.

use std::time::Instant;

use serde::Serialize;

use crate::isa::instruction::{Instruction, InstructionClass};

/// Simulation statistics structure.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions executed.
    pub instructions: u64,

    /// ALU, complement and shift instructions.
    pub inst_alu: u64,
    /// Loads, stores, moves and dereferences.
    pub inst_transfer: u64,
    /// Stack pushes and pops.
    pub inst_stack: u64,
    /// `NOP` and `BRK`.
    pub inst_system: u64,

    /// Conditional jumps whose flag was set.
    pub jumps_taken: u64,
    /// Conditional jumps that fell through.
    pub jumps_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            inst_alu: 0,
            inst_transfer: 0,
            inst_stack: 0,
            inst_system: 0,
            jumps_taken: 0,
            jumps_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Counts one executed instruction.
    ///
    /// `taken` is only consulted for jumps.
    pub const fn record(&mut self, insn: Instruction, taken: bool) {
        self.instructions += 1;
        match insn.class() {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Transfer => self.inst_transfer += 1,
            InstructionClass::Stack => self.inst_stack += 1,
            InstructionClass::System => self.inst_system += 1,
            InstructionClass::Jump if taken => self.jumps_taken += 1,
            InstructionClass::Jump => self.jumps_not_taken += 1,
        }
    }

    /// Total conditional jumps executed.
    pub const fn jumps(&self) -> u64 {
        self.jumps_taken + self.jumps_not_taken
    }

    /// Prints the statistics report to stdout.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let kips = if seconds > 0.0 {
            (self.instructions as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("EMU8 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions);
        println!("sim_kips                 {kips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!(
            "  op.transfer            {} ({:.2}%)",
            self.inst_transfer,
            pct(self.inst_transfer)
        );
        println!("  op.jump                {} ({:.2}%)", self.jumps(), pct(self.jumps()));
        println!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        println!(
            "  op.system              {} ({:.2}%)",
            self.inst_system,
            pct(self.inst_system)
        );
        println!("----------------------------------------------------------");
        println!("JUMPS");
        println!("  jump.taken             {}", self.jumps_taken);
        println!("  jump.not_taken         {}", self.jumps_not_taken);
        println!("==========================================================");
    }
}
