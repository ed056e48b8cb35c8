//! Architectural register state.
//!
//! This module contains the programmer-visible register storage:
//! 1. **GPRs:** The four general-purpose byte registers.
//! 2. **Flags:** The packed flags byte with named bit accessors.

/// Flags register implementation.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
