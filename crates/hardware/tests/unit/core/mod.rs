//! # Core
//!
//! Architectural state, the fetch-decode-execute engine and the ALU.
