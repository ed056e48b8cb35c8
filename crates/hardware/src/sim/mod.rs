//! Simulation utilities and image loading.
//!
//! Provides the image loader, the instruction trace sinks and the step-loop
//! driver built on top of the CPU.

pub mod loader;
pub mod simulator;
pub mod trace;
