//! # General-Purpose Register Tests

use emu8_core::common::Reg;
use emu8_core::core::arch::Gpr;

#[test]
fn test_new_is_zeroed() {
    let gpr = Gpr::new();
    for reg in Reg::GENERAL {
        assert_eq!(gpr.read(reg), 0);
    }
}

#[test]
fn test_registers_are_independent() {
    let mut gpr = Gpr::new();
    for (i, reg) in (1u8..).zip(Reg::GENERAL) {
        gpr.write(reg, i * 0x11);
    }
    assert_eq!(gpr.read(Reg::A), 0x11);
    assert_eq!(gpr.read(Reg::B), 0x22);
    assert_eq!(gpr.read(Reg::C), 0x33);
    assert_eq!(gpr.read(Reg::D), 0x44);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "F is not a general register")]
fn test_write_to_flags_register_panics_in_debug() {
    let mut gpr = Gpr::new();
    gpr.write(Reg::F, 0xFF);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "F is not a general register")]
fn test_read_of_flags_register_panics_in_debug() {
    let _ = Gpr::new().read(Reg::F);
}

#[test]
#[cfg(not(debug_assertions))]
fn test_flags_register_has_no_slot() {
    let mut gpr = Gpr::new();
    gpr.write(Reg::F, 0xFF);
    assert_eq!(gpr.read(Reg::F), 0);
    assert_eq!(gpr, Gpr::new());
}

#[test]
fn test_clear() {
    let mut gpr = Gpr::new();
    gpr.write(Reg::C, 0x80);
    gpr.clear();
    assert_eq!(gpr.read(Reg::C), 0);
}
