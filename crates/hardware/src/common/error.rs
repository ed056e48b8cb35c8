//! Emulator error definitions.
//!
//! Only two things can go wrong while running a program: the memory image cannot
//! be read or does not fit the address space, or the decoder meets a byte that is
//! not in the opcode table. Register overflow, pointer wraparound and address
//! arithmetic are all defined behaviour and never produce an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the emulator core and the image loader.
#[derive(Debug, Error)]
pub enum EmuError {
    /// The byte at `address` does not name any instruction.
    ///
    /// Fatal: the processor state is left exactly as it was before the step.
    #[error("illegal instruction ${opcode:02X} at {address:#06x}")]
    IllegalOpcode {
        /// Offending opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        address: u16,
    },

    /// The image file could not be opened or read.
    #[error("could not read image '{}': {source}", path.display())]
    ImageRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The image is larger than the 64 KiB address space.
    #[error("image of {len} bytes does not fit the 64 KiB address space")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
    },

    /// The image ends before the program region begins.
    #[error("image of {len} bytes has no program region (expected more than 32768 bytes)")]
    ImageTooShort {
        /// Image length in bytes.
        len: usize,
    },

    /// A configuration file could not be opened or read.
    #[error("could not read configuration '{}': {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration document is not valid JSON for [`crate::Config`].
    #[error("invalid configuration '{}': {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EmuError>;
