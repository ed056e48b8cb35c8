use emu8_core::Simulator;
use emu8_core::common::Reg;
use emu8_core::common::constants::PROGRAM_BASE;
use emu8_core::core::Cpu;
use emu8_core::core::arch::Flags;

/// Installs a test-friendly `tracing` subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();
        Self {
            sim: Simulator::new(Cpu::new()),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load program bytes at the program base, where `IP` starts.
    pub fn load_program(mut self, bytes: &[u8]) -> Self {
        self.sim.cpu.memory.load(PROGRAM_BASE, bytes);
        self
    }

    /// Place data bytes at an arbitrary address.
    pub fn with_data(mut self, addr: u16, bytes: &[u8]) -> Self {
        self.sim.cpu.memory.load(addr, bytes);
        self
    }

    /// Set a byte register (`F` writes the raw flags byte).
    pub fn set_reg(&mut self, reg: Reg, val: u8) {
        self.sim.cpu.write(reg, val);
    }

    /// Read a byte register.
    pub fn get_reg(&self, reg: Reg) -> u8 {
        self.sim.cpu.read(reg)
    }

    pub fn flags(&self) -> Flags {
        self.sim.cpu.flags
    }

    /// Execute one instruction; panics on an illegal opcode.
    pub fn step(&mut self) -> bool {
        self.sim.step().unwrap()
    }

    /// Execute `n` instructions.
    pub fn run_steps(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step();
        }
    }

    /// Run until the processor halts, returning the number of steps taken.
    pub fn run_to_halt(&mut self, limit: u64) -> u64 {
        let outcome = self.sim.run(Some(limit)).unwrap();
        assert!(
            self.sim.cpu.is_halted(),
            "program did not halt within {limit} steps"
        );
        outcome.steps()
    }
}
