//! ALU Arithmetic Operation Tests
//!
//! Add-with-carry and subtract-with-borrow: boundary values, wraparound and
//! the incoming carry.

use emu8_core::core::arch::Flags;
use emu8_core::core::units::alu::{Alu, AluOp, arithmetic};
use rstest::rstest;

// ─── Helper ──────────────────────────────────────────────────────────────────

/// Runs `op` with the given incoming carry and returns the result and flags.
fn alu(op: AluOp, a: u8, b: u8, carry: bool) -> (u8, Flags) {
    let mut flags = Flags::default();
    flags.set_carry(carry);
    let result = Alu::execute(op, a, b, &mut flags);
    (result, flags)
}

// ═════════════════════════════════════════════════════════════════════════════
//  ADC
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0x00, 0x00, false, 0x00)]
#[case(0x05, 0x03, false, 0x08)]
#[case(0x05, 0x03, true, 0x09)]
#[case(0x7F, 0x01, false, 0x80)]
#[case(0xFF, 0x01, false, 0x00)]
#[case(0xFF, 0xFF, true, 0xFF)]
#[case(0x80, 0x80, false, 0x00)]
#[case(0x00, 0xFF, true, 0x00)]
fn test_adc_values(#[case] a: u8, #[case] b: u8, #[case] carry: bool, #[case] expected: u8) {
    assert_eq!(arithmetic::execute(AluOp::Adc, a, b, u8::from(carry)), expected);
    assert_eq!(alu(AluOp::Adc, a, b, carry).0, expected);
}

#[test]
fn test_adc_flags_no_overflow() {
    let (_, flags) = alu(AluOp::Adc, 0x05, 0x03, false);
    assert!(!flags.zero());
    assert!(!flags.carry());
    assert!(flags.greater());
}

#[test]
fn test_adc_flags_into_sign_bit() {
    let (result, flags) = alu(AluOp::Adc, 0x7F, 0x01, false);
    assert_eq!(result, 0x80);
    assert!(!flags.carry());
    assert!(!flags.greater());
}

#[test]
fn test_adc_flags_wraparound() {
    let (result, flags) = alu(AluOp::Adc, 0xFF, 0x01, false);
    assert_eq!(result, 0x00);
    assert!(flags.zero());
    assert!(flags.carry());
    assert!(flags.greater());
}

#[test]
fn test_adc_full_wrap_is_not_carry() {
    // 0xFF + 0xFF + 1 wraps all the way back to 0xFF: not less than before.
    let (result, flags) = alu(AluOp::Adc, 0xFF, 0xFF, true);
    assert_eq!(result, 0xFF);
    assert!(!flags.carry());
}

// ═════════════════════════════════════════════════════════════════════════════
//  SBB
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0x05, 0x03, false, 0x02)]
#[case(0x05, 0x03, true, 0x01)]
#[case(0x03, 0x03, false, 0x00)]
#[case(0x03, 0x05, false, 0xFE)]
#[case(0x00, 0x00, true, 0xFF)]
#[case(0x80, 0x01, false, 0x7F)]
fn test_sbb_values(#[case] a: u8, #[case] b: u8, #[case] carry: bool, #[case] expected: u8) {
    assert_eq!(arithmetic::execute(AluOp::Sbb, a, b, u8::from(carry)), expected);
    assert_eq!(alu(AluOp::Sbb, a, b, carry).0, expected);
}

#[test]
fn test_sbb_to_zero() {
    let (_, flags) = alu(AluOp::Sbb, 0x42, 0x42, false);
    assert!(flags.zero());
    assert!(flags.carry());
    assert!(flags.greater());
}

#[test]
fn test_sbb_borrow() {
    let (_, flags) = alu(AluOp::Sbb, 0x00, 0x00, true);
    assert!(!flags.zero());
    // 0xFF is not less than 0x00.
    assert!(!flags.carry());
    assert!(!flags.greater());
}

#[test]
fn test_sbb_positive_result_sets_carry() {
    // Any decrease counts as carry under the result < before rule.
    let (_, flags) = alu(AluOp::Sbb, 0x05, 0x01, false);
    assert!(flags.carry());
}

#[test]
fn test_arithmetic_ignores_logic_ops() {
    assert_eq!(arithmetic::execute(AluOp::And, 0x12, 0x34, 1), 0x12);
    assert_eq!(arithmetic::execute(AluOp::Lor, 0x12, 0x34, 1), 0x12);
}
