//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Memory map, initial pointer values and flag bit masks.
//! 2. **Error Handling:** The crate-wide error enum and `Result` alias.
//! 3. **Register Names:** Identifiers for the byte registers and register pairs.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register identifiers.
pub mod reg;

pub use constants::{INITIAL_IP, INITIAL_SP, MEMORY_SIZE};
pub use error::{EmuError, Result};
pub use reg::{Reg, RegPair};
