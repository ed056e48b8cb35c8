//! ALU shift operations.
//!
//! Logical shifts of an 8-bit value by an 8-bit count. Bits shifted out are
//! lost (no carry-out is captured) and a count of 8 or more clears the value.

use crate::isa::instruction::ShiftDir;

/// Executes a logical shift.
///
/// # Arguments
///
/// * `dir`   - Shift direction.
/// * `a`     - Value to shift.
/// * `count` - Shift amount; any value of 8 or more yields 0.
pub fn execute(dir: ShiftDir, a: u8, count: u8) -> u8 {
    let count = u32::from(count);
    match dir {
        ShiftDir::Left => a.checked_shl(count).unwrap_or(0),
        ShiftDir::Right => a.checked_shr(count).unwrap_or(0),
    }
}
