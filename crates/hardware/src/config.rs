//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Structures:** General run settings and image placement.
//! 2. **Parsing:** JSON documents via `serde_json`, with every field defaulted.
//!
//! Use `Config::default()` when no file is given; command-line flags are
//! applied on top of whatever was loaded.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{EmuError, Result};
use crate::sim::loader::ImageLayout;

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use emu8_core::config::Config;
/// use emu8_core::sim::loader::ImageLayout;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, None);
/// assert_eq!(config.image.layout, ImageLayout::ProgramHalf);
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 1000 },
///     "image": { "layout": "flat" }
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.image.layout, ImageLayout::Flat);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Image placement
    #[serde(default)]
    pub image: ImageConfig,
}

impl Config {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or has
    /// fields of the wrong type.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`EmuError::ConfigRead`] if the file cannot be read,
    /// [`EmuError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EmuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| EmuError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Report every executed instruction through `tracing` at `TRACE` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions; `None` runs until halt
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Image placement settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    /// How image bytes map onto memory
    #[serde(default)]
    pub layout: ImageLayout,
}
