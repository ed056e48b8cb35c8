//! System Memory.
//!
//! The processor has no devices and no memory map beyond a single flat bank:
//! the low half conventionally holds data and the downward-growing stack, the
//! high half holds the program. Nothing enforces that split.

/// Flat buffer backing the 16-bit address space.
pub mod buffer;

pub use self::buffer::MemoryBank;
