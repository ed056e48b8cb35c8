//! System-on-chip components.
//!
//! The only component outside the core is the flat memory bank.

/// Flat memory bank.
pub mod memory;

pub use memory::MemoryBank;
