//! Decoded instruction model.
//!
//! Every opcode decodes to one [`Instruction`]: an operation kind plus the
//! destination register and an operand descriptor saying where the source value
//! comes from. The execution engine dispatches on this shape, so the 147 opcodes
//! share a dozen handlers instead of one hand-written case each.

use std::fmt;

use crate::common::{Reg, RegPair};
use crate::core::units::alu::AluOp;

/// Where a source value (or store address) comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A register.
    Reg(Reg),
    /// The next byte in the instruction stream.
    Imm,
    /// The byte at the 16-bit little-endian address in the instruction stream.
    Mem,
}

impl Operand {
    /// Number of inline bytes this operand consumes.
    pub const fn inline_len(self) -> u16 {
        match self {
            Self::Reg(_) => 0,
            Self::Imm => 1,
            Self::Mem => 2,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(r) => write!(f, "{r}"),
            Self::Imm => f.write_str("IMM"),
            Self::Mem => f.write_str("MEM"),
        }
    }
}

/// Logical shift direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDir {
    /// Shift toward bit 7.
    Left,
    /// Shift toward bit 0.
    Right,
}

/// Flag tested by a conditional jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Jump if `Zero` is set.
    Zero,
    /// Jump if `Greater` is set.
    Greater,
    /// Jump if `Carry` is set.
    Carry,
}

/// Value pushed by a push instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PushSource {
    /// A byte register (including `F`).
    Reg(Reg),
    /// The instruction pointer, as two bytes.
    Ip,
    /// The next byte in the instruction stream.
    Imm,
    /// The byte at an 8-bit inline address (`0x00`-`0xFF`).
    ZeroPage,
}

/// Destination of a pop instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopTarget {
    /// A byte register (including `F`).
    Reg(Reg),
    /// The instruction pointer, from two bytes.
    Ip,
    /// Drop the byte.
    Discard,
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// No operation.
    Nop,
    /// Set the halt flag.
    Brk,
    /// `dst = dst op src`, updating `Zero`, `Carry` and `Greater`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination (and first operand) register.
        dst: Reg,
        /// Second operand.
        src: Operand,
    },
    /// Bitwise complement in place; updates `Zero`.
    Not(Reg),
    /// Logical shift by an inline count; updates `Zero`.
    Shift {
        /// Direction.
        dir: ShiftDir,
        /// Register shifted in place.
        dst: Reg,
    },
    /// Load a register from an immediate or memory operand.
    Load {
        /// Destination register.
        dst: Reg,
        /// `Imm` or `Mem`.
        src: Operand,
    },
    /// Store a register or immediate to an inline 16-bit address.
    ///
    /// The address always comes first in the encoding, so `STB_MEM_IMM` is
    /// laid out as `opcode, addr_lo, addr_hi, imm`. Images that put the
    /// immediate ahead of the address are not compatible with this encoding.
    Store {
        /// `Reg` or `Imm`.
        src: Operand,
    },
    /// Copy one byte register into another; either side may be `F`.
    Move {
        /// Destination register.
        dst: Reg,
        /// Source register.
        src: Reg,
    },
    /// Jump to an inline 16-bit address if the condition flag is set.
    Jump(Condition),
    /// Push onto the stack.
    Push(PushSource),
    /// Pop from the stack.
    Pop(PopTarget),
    /// Load the low register of a pair from the address the pair forms.
    Deref(RegPair),
}

/// Coarse instruction classes used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// ALU, complement and shift operations.
    Alu,
    /// Loads, stores, moves and dereferences.
    Transfer,
    /// Conditional jumps.
    Jump,
    /// Pushes and pops.
    Stack,
    /// `NOP` and `BRK`.
    System,
}

impl Instruction {
    /// Number of inline operand bytes that follow the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            Self::Nop
            | Self::Brk
            | Self::Not(_)
            | Self::Move { .. }
            | Self::Deref(_)
            | Self::Pop(_) => 0,
            Self::Alu { src, .. } | Self::Load { src, .. } => src.inline_len(),
            Self::Shift { .. } => 1,
            Self::Store { src } => 2 + src.inline_len(),
            Self::Jump(_) => 2,
            Self::Push(src) => match src {
                PushSource::Reg(_) | PushSource::Ip => 0,
                PushSource::Imm | PushSource::ZeroPage => 1,
            },
        }
    }

    /// Total encoded length in bytes, opcode included.
    pub const fn encoded_len(self) -> u16 {
        1 + self.operand_len()
    }

    /// Instruction class for statistics.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Nop | Self::Brk => InstructionClass::System,
            Self::Alu { .. } | Self::Not(_) | Self::Shift { .. } => InstructionClass::Alu,
            Self::Load { .. } | Self::Store { .. } | Self::Move { .. } | Self::Deref(_) => {
                InstructionClass::Transfer
            }
            Self::Jump(_) => InstructionClass::Jump,
            Self::Push(_) | Self::Pop(_) => InstructionClass::Stack,
        }
    }
}

impl fmt::Display for Instruction {
    /// Writes the mnemonic, e.g. `ADC_A_B`, `LDB_C_MEM`, `PUSH_IP`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Nop => f.write_str("NOP"),
            Self::Brk => f.write_str("BRK"),
            Self::Alu { op, dst, src } => write!(f, "{op}_{dst}_{src}"),
            Self::Not(r) => write!(f, "NOT_{r}"),
            Self::Shift {
                dir: ShiftDir::Left,
                dst,
            } => write!(f, "ROL_{dst}_IMM"),
            Self::Shift {
                dir: ShiftDir::Right,
                dst,
            } => write!(f, "ROR_{dst}_IMM"),
            Self::Load { dst, src } => write!(f, "LDB_{dst}_{src}"),
            Self::Store { src } => write!(f, "STB_MEM_{src}"),
            Self::Move { dst, src } => write!(f, "MVB_{dst}_{src}"),
            Self::Jump(Condition::Zero) => f.write_str("JEZ_MEM"),
            Self::Jump(Condition::Greater) => f.write_str("JGZ_MEM"),
            Self::Jump(Condition::Carry) => f.write_str("JCS_MEM"),
            Self::Push(PushSource::Reg(r)) => write!(f, "PUSH_{r}"),
            Self::Push(PushSource::Ip) => f.write_str("PUSH_IP"),
            Self::Push(PushSource::Imm) => f.write_str("PUSH_IMM"),
            Self::Push(PushSource::ZeroPage) => f.write_str("PUSH_MEM"),
            Self::Pop(PopTarget::Reg(r)) => write!(f, "POP_{r}"),
            Self::Pop(PopTarget::Ip) => f.write_str("POP_IP"),
            Self::Pop(PopTarget::Discard) => f.write_str("POP_DISCARD"),
            Self::Deref(RegPair::BA) => f.write_str("DEREF_AB_A"),
            Self::Deref(RegPair::DC) => f.write_str("DEREF_CD_C"),
        }
    }
}
