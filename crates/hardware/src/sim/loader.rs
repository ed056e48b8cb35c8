//! Image Loader.
//!
//! This module reads memory images from disk and places them into the CPU's
//! memory bank. It performs:
//! 1. **Binary loading:** Reads a raw image file into a byte buffer.
//! 2. **Placement:** Copies the image according to an [`ImageLayout`] and validates its size.
//!
//! Loading never touches registers; callers reset the CPU separately.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MEMORY_SIZE, PROGRAM_BASE};
use crate::common::{EmuError, Result};
use crate::core::Cpu;

/// How the bytes of an image map onto the address space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageLayout {
    /// The image is a full memory dump; only the program half
    /// (`0x8000..`) is copied, to the same addresses.
    #[default]
    #[serde(alias = "ProgramHalf")]
    ProgramHalf,
    /// The whole image is copied to address `0`.
    #[serde(alias = "Flat")]
    Flat,
}

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// [`EmuError::ImageRead`] if the file cannot be opened or read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| EmuError::ImageRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies `image` into `cpu.memory` according to `layout`.
///
/// Bytes of memory not covered by the image keep their previous contents.
///
/// # Errors
///
/// * [`EmuError::ImageTooLarge`] if the image exceeds 64 KiB.
/// * [`EmuError::ImageTooShort`] if a [`ImageLayout::ProgramHalf`] image
///   ends at or before `0x8000`.
pub fn load_image(cpu: &mut Cpu, image: &[u8], layout: ImageLayout) -> Result<()> {
    if image.len() > MEMORY_SIZE {
        return Err(EmuError::ImageTooLarge { len: image.len() });
    }

    match layout {
        ImageLayout::ProgramHalf => {
            let program = image
                .get(usize::from(PROGRAM_BASE)..)
                .filter(|p| !p.is_empty())
                .ok_or(EmuError::ImageTooShort { len: image.len() })?;
            cpu.memory.load(PROGRAM_BASE, program);
        }
        ImageLayout::Flat => cpu.memory.load(0, image),
    }

    tracing::debug!(len = image.len(), ?layout, "image loaded");
    Ok(())
}
