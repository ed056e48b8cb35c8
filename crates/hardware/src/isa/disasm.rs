//! Instruction Disassembler.
//!
//! Renders the instruction at an address together with its inline operands,
//! for trace output and error diagnostics:
//!
//! ```
//! use emu8_core::isa::disasm::disassemble;
//! use emu8_core::isa::opcodes::{JEZ_MEM, LDB_A_IMM};
//! use emu8_core::soc::MemoryBank;
//!
//! let mut mem = MemoryBank::new();
//! mem.load(0x8000, &[LDB_A_IMM, 0x05, JEZ_MEM, 0x10, 0x80]);
//! assert_eq!(disassemble(&mem, 0x8000), "LDB_A_IMM $05");
//! assert_eq!(disassemble(&mem, 0x8002), "JEZ_MEM $8010");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Operand, PushSource};
use crate::soc::MemoryBank;

/// Disassembles the instruction at `addr`.
///
/// Returns `".db $XX"` for bytes that are not defined opcodes.
pub fn disassemble(mem: &MemoryBank, addr: u16) -> String {
    let opcode = mem.read(addr);
    let Some(insn) = decode(opcode) else {
        return format!(".db ${opcode:02X}");
    };

    let byte = |offset: u16| mem.read(addr.wrapping_add(offset));
    let word = |offset: u16| u16::from_le_bytes([byte(offset), byte(offset + 1)]);

    match insn {
        Instruction::Alu {
            src: Operand::Imm, ..
        }
        | Instruction::Load {
            src: Operand::Imm, ..
        }
        | Instruction::Shift { .. }
        | Instruction::Push(PushSource::Imm | PushSource::ZeroPage) => {
            format!("{insn} ${:02X}", byte(1))
        }
        Instruction::Alu {
            src: Operand::Mem, ..
        }
        | Instruction::Load {
            src: Operand::Mem, ..
        }
        | Instruction::Store {
            src: Operand::Reg(_),
        }
        | Instruction::Jump(_) => format!("{insn} ${:04X}", word(1)),
        Instruction::Store { src: Operand::Imm } => {
            format!("{insn} ${:04X}, ${:02X}", word(1), byte(3))
        }
        _ => insn.to_string(),
    }
}
