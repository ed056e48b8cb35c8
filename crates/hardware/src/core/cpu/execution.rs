//! Main Execution Step.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Read the opcode byte at `IP`.
//! 2. **Decode:** Look the byte up in the static decode table; unknown bytes are fatal.
//! 3. **Execute:** Dispatch on the decoded shape to one of a dozen generic handlers.
//!
//! The processor is either running or halted. Halting happens when the `Halt`
//! flag becomes set, normally through `BRK`; once halted, further steps do
//! nothing.

use super::Cpu;
use crate::common::{EmuError, RegPair, Result};
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::{Condition, Instruction, Operand, PopTarget, PushSource};

/// Record of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the opcode was fetched from.
    pub address: u16,
    /// Opcode byte.
    pub opcode: u8,
    /// Decoded instruction.
    pub instruction: Instruction,
}

impl Retired {
    /// Address of the instruction that sequentially follows this one.
    pub const fn fallthrough(&self) -> u16 {
        self.address.wrapping_add(self.instruction.encoded_len())
    }
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// `Ok(true)` while the processor keeps running, `Ok(false)` once it has
    /// halted.
    ///
    /// # Errors
    ///
    /// [`EmuError::IllegalOpcode`] if the byte at `IP` is not a defined opcode.
    /// The processor state is not modified in that case.
    pub fn step(&mut self) -> Result<bool> {
        let _ = self.execute_next()?;
        Ok(!self.is_halted())
    }

    /// Executes one instruction and reports what ran.
    ///
    /// # Returns
    ///
    /// `Ok(None)` without executing anything if the processor is already halted.
    ///
    /// # Errors
    ///
    /// [`EmuError::IllegalOpcode`] if the byte at `IP` is not a defined opcode.
    pub fn execute_next(&mut self) -> Result<Option<Retired>> {
        if self.is_halted() {
            return Ok(None);
        }

        let address = self.ip;
        let opcode = self.memory.read(address);
        let Some(instruction) = decode(opcode) else {
            tracing::debug!(opcode, address, "illegal opcode");
            return Err(EmuError::IllegalOpcode { opcode, address });
        };

        self.ip = address.wrapping_add(1);
        self.insn = opcode;
        self.execute(instruction);

        Ok(Some(Retired {
            address,
            opcode,
            instruction,
        }))
    }

    /// Applies a decoded instruction whose opcode has already been consumed.
    ///
    /// Inline operands are fetched from `IP` as the instruction needs them.
    pub fn execute(&mut self, insn: Instruction) {
        match insn {
            Instruction::Nop => {}
            Instruction::Brk => {
                self.flags.set_halt(true);
                tracing::debug!(ip = self.ip, "halt");
            }
            Instruction::Alu { op, dst, src } => {
                let before = self.read(dst);
                let operand = self.operand(src);
                let result = Alu::execute(op, before, operand, &mut self.flags);
                self.write(dst, result);
            }
            Instruction::Not(r) => {
                let result = Alu::not(self.read(r), &mut self.flags);
                self.write(r, result);
            }
            Instruction::Shift { dir, dst } => {
                let count = self.fetch8();
                let result = Alu::shift(dir, self.read(dst), count, &mut self.flags);
                self.write(dst, result);
            }
            Instruction::Load { dst, src } => {
                let val = self.operand(src);
                self.write(dst, val);
            }
            Instruction::Store { src } => {
                // Address before any immediate source byte.
                let addr = self.fetch16();
                let val = self.operand(src);
                self.memory.write(addr, val);
            }
            Instruction::Move { dst, src } => {
                let val = self.read(src);
                self.write(dst, val);
            }
            Instruction::Jump(cond) => {
                let target = self.fetch16();
                if self.condition(cond) {
                    self.ip = target;
                }
            }
            Instruction::Push(src) => self.push(src),
            Instruction::Pop(dst) => self.pop(dst),
            Instruction::Deref(pair) => self.deref(pair),
        }
    }

    /// Resolves a source operand, fetching inline bytes as required.
    fn operand(&mut self, src: Operand) -> u8 {
        match src {
            Operand::Reg(r) => self.read(r),
            Operand::Imm => self.fetch8(),
            Operand::Mem => self.fetch_mem_operand(),
        }
    }

    /// Returns `true` if the flag tested by `cond` is set.
    pub const fn condition(&self, cond: Condition) -> bool {
        match cond {
            Condition::Zero => self.flags.zero(),
            Condition::Greater => self.flags.greater(),
            Condition::Carry => self.flags.carry(),
        }
    }

    fn push(&mut self, src: PushSource) {
        match src {
            PushSource::Reg(r) => self.push8(self.read(r)),
            PushSource::Ip => self.push16(self.ip),
            PushSource::Imm => {
                let val = self.fetch8();
                self.push8(val);
            }
            // 8-bit address: only the first 256 bytes are reachable.
            PushSource::ZeroPage => {
                let addr = u16::from(self.fetch8());
                self.push8(self.memory.read(addr));
            }
        }
    }

    fn pop(&mut self, dst: PopTarget) {
        match dst {
            PopTarget::Reg(r) => {
                let val = self.pop8();
                self.write(r, val);
            }
            PopTarget::Ip => self.ip = self.pop16(),
            PopTarget::Discard => {
                let _ = self.pop8();
            }
        }
    }

    /// Loads the pair's low register from the address `high:low`.
    ///
    /// Leaves `SP` and stack memory untouched.
    fn deref(&mut self, pair: RegPair) {
        let addr = u16::from_le_bytes([self.read(pair.low()), self.read(pair.high())]);
        let val = self.memory.read(addr);
        self.write(pair.low(), val);
    }
}
