//! Instruction Decoder.
//!
//! Decoding is a single lookup in a 256-entry table built once per process.
//! The table is generated from the regular layout of the opcode space rather
//! than listed by hand:
//!
//! | Opcode                  | Instruction                      |
//! |-------------------------|----------------------------------|
//! | `0x00`, `0x01`          | `NOP`, `BRK`                     |
//! | `0x10 + 0x10*op + pair` | ALU register/register            |
//! | `0x1C + 0x10*op + r`    | ALU register/immediate           |
//! | `0x50 + 4*op + r`       | ALU register/memory              |
//! | `0x60`, `0x64`, `0x68`  | `NOT`, `ROL`, `ROR` (`+ r`)      |
//! | `0x70`, `0x74`          | `LDB` immediate, memory (`+ r`)  |
//! | `0x78 + r`, `0x7C`      | `STB` register, immediate        |
//! | `0x80 + pair`           | `MVB` register/register          |
//! | `0x8C + r`, `0x90 + r`  | `MVB r, F`, `MVB F, r`           |
//! | `0xA0`-`0xA2`           | `JEZ`, `JGZ`, `JCS`              |
//! | `0xB0`-`0xB7`           | `PUSH`                           |
//! | `0xC0`-`0xC6`           | `POP`                            |
//! | `0xD0`, `0xD1`          | `DEREF`                          |
//!
//! `op` is the [`AluOp`] index, `r` the general register index and `pair` the
//! index into [`Reg::PAIRS`]. Every other byte is illegal.

use std::sync::LazyLock;

use crate::common::{Reg, RegPair};
use crate::core::units::alu::AluOp;
use crate::isa::instruction::{
    Condition, Instruction, Operand, PopTarget, PushSource, ShiftDir,
};

/// Opcode of the first register/register ALU instruction.
const ALU_REG_BASE: u8 = 0x10;
/// Opcode of the first register/immediate ALU instruction.
const ALU_IMM_BASE: u8 = 0x1C;
/// Distance between the register and immediate groups of consecutive ALU ops.
const ALU_GROUP_STRIDE: u8 = 0x10;
/// Opcode of the first register/memory ALU instruction.
const ALU_MEM_BASE: u8 = 0x50;

const NOT_BASE: u8 = 0x60;
const ROL_BASE: u8 = 0x64;
const ROR_BASE: u8 = 0x68;
const LDB_IMM_BASE: u8 = 0x70;
const LDB_MEM_BASE: u8 = 0x74;
const STB_REG_BASE: u8 = 0x78;
const STB_IMM: u8 = 0x7C;
const MVB_REG_BASE: u8 = 0x80;
const MVB_FROM_F_BASE: u8 = 0x8C;
const MVB_TO_F_BASE: u8 = 0x90;
const JUMP_BASE: u8 = 0xA0;
const PUSH_BASE: u8 = 0xB0;
const POP_BASE: u8 = 0xC0;
const DEREF_BASE: u8 = 0xD0;

/// Byte-indexed decode table.
pub type DecodeTable = [Option<Instruction>; 256];

static TABLE: LazyLock<DecodeTable> = LazyLock::new(build_table);

/// Decodes one opcode byte.
///
/// # Returns
///
/// The instruction, or `None` if the byte is not a defined opcode.
#[inline]
pub fn decode(opcode: u8) -> Option<Instruction> {
    TABLE[opcode as usize]
}

/// Returns the process-wide decode table.
pub fn table() -> &'static DecodeTable {
    &TABLE
}

/// Builds the decode table from the opcode layout.
pub fn build_table() -> DecodeTable {
    let mut t: DecodeTable = [None; 256];
    let mut put = |opcode: u8, insn: Instruction| {
        debug_assert!(t[opcode as usize].is_none(), "opcode {opcode:#04x} assigned twice");
        t[opcode as usize] = Some(insn);
    };

    put(0x00, Instruction::Nop);
    put(0x01, Instruction::Brk);

    for (op_idx, op) in (0u8..).zip(AluOp::ALL) {
        for (pair_idx, (dst, src)) in (0u8..).zip(Reg::PAIRS) {
            let insn = Instruction::Alu {
                op,
                dst,
                src: Operand::Reg(src),
            };
            put(ALU_REG_BASE + ALU_GROUP_STRIDE * op_idx + pair_idx, insn);
        }
        for (r_idx, dst) in (0u8..).zip(Reg::GENERAL) {
            let imm = Instruction::Alu {
                op,
                dst,
                src: Operand::Imm,
            };
            put(ALU_IMM_BASE + ALU_GROUP_STRIDE * op_idx + r_idx, imm);
            let mem = Instruction::Alu {
                op,
                dst,
                src: Operand::Mem,
            };
            put(ALU_MEM_BASE + 4 * op_idx + r_idx, mem);
        }
    }

    for (r_idx, r) in (0u8..).zip(Reg::GENERAL) {
        put(NOT_BASE + r_idx, Instruction::Not(r));
        put(
            ROL_BASE + r_idx,
            Instruction::Shift {
                dir: ShiftDir::Left,
                dst: r,
            },
        );
        put(
            ROR_BASE + r_idx,
            Instruction::Shift {
                dir: ShiftDir::Right,
                dst: r,
            },
        );
        put(
            LDB_IMM_BASE + r_idx,
            Instruction::Load {
                dst: r,
                src: Operand::Imm,
            },
        );
        put(
            LDB_MEM_BASE + r_idx,
            Instruction::Load {
                dst: r,
                src: Operand::Mem,
            },
        );
        put(
            STB_REG_BASE + r_idx,
            Instruction::Store {
                src: Operand::Reg(r),
            },
        );
        put(
            MVB_FROM_F_BASE + r_idx,
            Instruction::Move { dst: r, src: Reg::F },
        );
        put(
            MVB_TO_F_BASE + r_idx,
            Instruction::Move { dst: Reg::F, src: r },
        );
        put(PUSH_BASE + r_idx, Instruction::Push(PushSource::Reg(r)));
        put(POP_BASE + r_idx, Instruction::Pop(PopTarget::Reg(r)));
    }
    put(STB_IMM, Instruction::Store { src: Operand::Imm });

    for (pair_idx, (dst, src)) in (0u8..).zip(Reg::PAIRS) {
        put(MVB_REG_BASE + pair_idx, Instruction::Move { dst, src });
    }

    put(JUMP_BASE, Instruction::Jump(Condition::Zero));
    put(JUMP_BASE + 1, Instruction::Jump(Condition::Greater));
    put(JUMP_BASE + 2, Instruction::Jump(Condition::Carry));

    put(PUSH_BASE + 4, Instruction::Push(PushSource::Reg(Reg::F)));
    put(PUSH_BASE + 5, Instruction::Push(PushSource::Ip));
    put(PUSH_BASE + 6, Instruction::Push(PushSource::Imm));
    put(PUSH_BASE + 7, Instruction::Push(PushSource::ZeroPage));

    put(POP_BASE + 4, Instruction::Pop(PopTarget::Reg(Reg::F)));
    put(POP_BASE + 5, Instruction::Pop(PopTarget::Ip));
    put(POP_BASE + 6, Instruction::Pop(PopTarget::Discard));

    put(DEREF_BASE, Instruction::Deref(RegPair::BA));
    put(DEREF_BASE + 1, Instruction::Deref(RegPair::DC));

    t
}
