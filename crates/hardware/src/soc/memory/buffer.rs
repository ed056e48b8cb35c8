//! Memory Bank Buffer.
//!
//! Backing storage for the flat 64 KiB address space. The index space matches
//! the 16-bit address range exactly, so every `u16` is a valid address and no
//! access can fall outside the buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::common::constants::MEMORY_SIZE;

/// Flat byte-addressable memory, heap allocated.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryBank {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl MemoryBank {
    /// Creates a zero-filled memory bank.
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Returns the size of the bank in bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; present for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads a single byte.
    #[inline(always)]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    /// Writes a single byte.
    #[inline(always)]
    pub fn write(&mut self, addr: u16, val: u8) {
        self.bytes[addr as usize] = val;
    }

    /// Copies `data` into the bank starting at `base`.
    ///
    /// Bytes that would land past `0xFFFF` are dropped; callers that care about
    /// the image fitting validate its length first.
    pub fn load(&mut self, base: u16, data: &[u8]) {
        let start = base as usize;
        let len = data.len().min(MEMORY_SIZE - start);
        self.bytes[start..start + len].copy_from_slice(&data[..len]);
    }

    /// Reads `len` bytes starting at `base`, clamped to the end of memory.
    pub fn read_slice(&self, base: u16, len: usize) -> &[u8] {
        let start = base as usize;
        let end = (start + len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }

    /// Whole-bank view.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for MemoryBank {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryBank {
    /// Summarises the bank instead of printing 64 KiB.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("MemoryBank")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl Index<u16> for MemoryBank {
    type Output = u8;

    fn index(&self, addr: u16) -> &Self::Output {
        &self.bytes[addr as usize]
    }
}

impl IndexMut<u16> for MemoryBank {
    fn index_mut(&mut self, addr: u16) -> &mut Self::Output {
        &mut self.bytes[addr as usize]
    }
}
