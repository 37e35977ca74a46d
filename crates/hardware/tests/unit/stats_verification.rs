//! # Statistics Verification
//!
//! Checks that [`SimStats`](pipesim_core::stats::SimStats) counts retirements, stalls
//! and squashes the way a run actually experiences them.

use pipesim_core::core::pipeline::signals::CycleSignals;
use pipesim_core::stats::SimStats;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::builder::instruction::{add, beq, halt, jalr, lw, noop, nor, sw};
use crate::common::harness::TestContext;

#[test]
fn test_record_classifies_retired_instructions() {
    let mut stats = SimStats::default();
    let quiet = CycleSignals::default();

    for instr in [add(0, 0, 1), nor(0, 0, 1), lw(0, 1, 0), sw(0, 1, 0), beq(0, 0, 0), jalr(0, 1), halt(), noop()] {
        stats.record(&quiet, instr);
    }

    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.instructions_retired, 7);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_other, 2);
}

#[test]
fn test_record_hazard_signals() {
    let mut stats = SimStats::default();
    stats.record(
        &CycleSignals {
            stall: true,
            ..CycleSignals::default()
        },
        noop(),
    );
    stats.record(
        &CycleSignals {
            stall: false,
            squash_depth: 3,
            squashed: 2,
        },
        noop(),
    );

    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.squash_events, 1);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.squashed_instructions, 2);
    assert_eq!(stats.instructions_retired, 0);
}

#[test]
fn test_cpi() {
    let mut stats = SimStats::default();
    assert!(stats.cpi().abs() < f64::EPSILON);

    stats.cycles = 9;
    stats.instructions_retired = 2;
    assert!((stats.cpi() - 4.5).abs() < f64::EPSILON);
}

#[test]
fn test_run_statistics_for_load_use_program() {
    let mut ctx = TestContext::load_program(&[lw(0, 1, 3), add(1, 1, 1), halt(), 5]);
    ctx.run_to_halt();

    let stats = &ctx.sim.stats;
    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_other, 1);
    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.squash_events, 0);
}

#[test]
fn test_report_contains_counters() {
    let mut ctx = TestContext::load_program(&[beq(0, 0, 1), nor(0, 0, 3), nor(0, 0, 4), halt()]);
    ctx.run_to_halt();

    let report = ctx.sim.stats.to_string();

    assert!(report.contains("sim_cycles               10\n"), "{report}");
    assert!(report.contains("sim_insts                3\n"), "{report}");
    assert!(report.contains("squash.events          1\n"), "{report}");
    assert!(report.contains("squash.instructions    3\n"), "{report}");
}

fn noop_with_fields(a: usize, b: usize) -> u32 {
    InstructionBuilder::new().noop().field_a(a).field_b(b).build()
}

#[test]
fn test_noop_with_nonzero_fields_is_not_retired() {
    let mut ctx = TestContext::load_program(&[noop_with_fields(1, 0), halt()]);
    ctx.run_to_halt();

    let stats = &ctx.sim.stats;
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(stats.inst_other, 1);
}

#[test]
fn test_squashed_noops_with_nonzero_fields_are_not_counted() {
    let filler = noop_with_fields(0, 2);
    let mut ctx = TestContext::load_program(&[beq(0, 0, 3), filler, filler, filler, halt()]);
    ctx.run_to_halt();

    let stats = &ctx.sim.stats;
    assert_eq!(stats.squash_events, 1);
    assert_eq!(stats.squashed_instructions, 0);
    assert_eq!(stats.instructions_retired, 2);
}
