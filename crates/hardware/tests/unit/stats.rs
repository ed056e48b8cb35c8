//! # Statistics Tests

use emu8_core::isa::decode::decode;
use emu8_core::isa::opcodes::{ADC_A_B, BRK, JCS_MEM, MVB_A_B, POP_A};
use emu8_core::stats::SimStats;

fn record(stats: &mut SimStats, opcode: u8, taken: bool) {
    stats.record(decode(opcode).unwrap(), taken);
}

#[test]
fn test_default_is_zeroed() {
    let stats = SimStats::default();
    assert_eq!(stats.instructions, 0);
    assert_eq!(stats.jumps(), 0);
}

#[test]
fn test_record_counts_classes() {
    let mut stats = SimStats::default();
    record(&mut stats, ADC_A_B, false);
    record(&mut stats, ADC_A_B, true);
    record(&mut stats, MVB_A_B, false);
    record(&mut stats, POP_A, false);
    record(&mut stats, BRK, false);

    assert_eq!(stats.instructions, 5);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_transfer, 1);
    assert_eq!(stats.inst_stack, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.jumps(), 0);
}

#[test]
fn test_record_splits_jumps() {
    let mut stats = SimStats::default();
    record(&mut stats, JCS_MEM, true);
    record(&mut stats, JCS_MEM, false);
    record(&mut stats, JCS_MEM, false);

    assert_eq!(stats.jumps_taken, 1);
    assert_eq!(stats.jumps_not_taken, 2);
    assert_eq!(stats.jumps(), 3);
}

#[test]
fn test_serializes_counters_only() {
    let mut stats = SimStats::default();
    record(&mut stats, BRK, false);
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["instructions"], serde_json::json!(1));
    assert!(value.get("start_time").is_none());
}

#[test]
fn test_print_handles_empty_run() {
    SimStats::default().print();
}
