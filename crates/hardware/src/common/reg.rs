//! Register identifiers.
//!
//! The processor exposes five byte-wide registers to the instruction set: the
//! general registers `A`-`D` and the flags register `F`. Only `F` has internal
//! structure (see [`crate::core::arch::flags::Flags`]); instructions that name it
//! directly (moves, push and pop) treat it as a plain byte.

use std::fmt;

/// A byte register addressable by instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    /// General register `A`.
    A,
    /// General register `B`.
    B,
    /// General register `C`.
    C,
    /// General register `D`.
    D,
    /// Flags register, viewed as a raw byte.
    F,
}

impl Reg {
    /// The general registers in encoding order.
    pub const GENERAL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Ordered `(destination, source)` pairs of distinct general registers, in
    /// encoding order: `AB AC AD BA BC BD CA CB CD DA DB DC`.
    pub const PAIRS: [(Self, Self); 12] = [
        (Self::A, Self::B),
        (Self::A, Self::C),
        (Self::A, Self::D),
        (Self::B, Self::A),
        (Self::B, Self::C),
        (Self::B, Self::D),
        (Self::C, Self::A),
        (Self::C, Self::B),
        (Self::C, Self::D),
        (Self::D, Self::A),
        (Self::D, Self::B),
        (Self::D, Self::C),
    ];

    /// Returns `true` for `A`-`D`.
    pub const fn is_general(self) -> bool {
        !matches!(self, Self::F)
    }

    /// Single-letter register name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pair of general registers forming a little-endian 16-bit address for the
/// indirect dereference instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegPair {
    /// `B:A` - `A` is the low byte and receives the loaded value.
    BA,
    /// `D:C` - `C` is the low byte and receives the loaded value.
    DC,
}

impl RegPair {
    /// Register holding the low address byte (and the load destination).
    pub const fn low(self) -> Reg {
        match self {
            Self::BA => Reg::A,
            Self::DC => Reg::C,
        }
    }

    /// Register holding the high address byte.
    pub const fn high(self) -> Reg {
        match self {
            Self::BA => Reg::B,
            Self::DC => Reg::D,
        }
    }
}
