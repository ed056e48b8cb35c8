//! Memory Access Helpers.
//!
//! Fetch and stack primitives used by the execution engine:
//! 1. **Fetch:** Read inline bytes at `IP`, advancing it; 16-bit values are little-endian.
//! 2. **Stack:** Push stores at `SP` then decrements; pop increments then reads.
//!
//! All pointer arithmetic wraps at 16 bits. A 16-bit push stores the high byte
//! first so that the matching pop, which reads the low byte first, restores the
//! original value.

use super::Cpu;

impl Cpu {
    /// Reads the byte at `IP` and advances `IP` by one.
    #[inline(always)]
    pub fn fetch8(&mut self) -> u8 {
        let val = self.memory.read(self.ip);
        self.ip = self.ip.wrapping_add(1);
        val
    }

    /// Reads a little-endian word at `IP` (low byte first) and advances `IP` by two.
    #[inline(always)]
    pub fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Stores `val` at `SP`, then decrements `SP`.
    #[inline(always)]
    pub fn push8(&mut self, val: u8) {
        self.memory.write(self.sp, val);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes the high byte, then the low byte.
    pub fn push16(&mut self, val: u16) {
        let [lo, hi] = val.to_le_bytes();
        self.push8(hi);
        self.push8(lo);
    }

    /// Increments `SP`, then reads the byte at the new `SP`.
    #[inline(always)]
    pub fn pop8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(self.sp)
    }

    /// Pops the low byte, then the high byte.
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop8();
        let hi = self.pop8();
        u16::from_le_bytes([lo, hi])
    }

    /// Fetches an inline 16-bit address and reads the byte there.
    #[inline]
    pub fn fetch_mem_operand(&mut self) -> u8 {
        let addr = self.fetch16();
        self.memory.read(addr)
    }
}
