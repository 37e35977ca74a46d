//! Data Forwarding Tests: RAW Hazard Resolution.
//!
//! Verifies that `forward_operands` bypasses results from EX/MEM, MEM/WB and WB/END with
//! the nearest producer winning, and that only real producers forward into real
//! consumers.

use pretty_assertions::assert_eq;

use pipesim_core::core::pipeline::hazards::{OperandSource, forward_operands};
use pipesim_core::core::pipeline::latches::{ExMem, IdEx, MemWb, WbEnd};

use crate::common::builder::instruction::{
    add, beq, halt, jalr, lw, noop, nor, sw,
};
use crate::common::builder::pipeline_state::{ExMemBuilder, IdExBuilder, mem_wb, wb_end};
use crate::common::harness::TestContext;

/// A consumer of r1 (field A) and r2 (field B) with recognizable stale values.
fn consumer(instr: u32) -> IdEx {
    IdExBuilder::new().instr(instr).regs(-101, -102).build()
}

fn idle() -> (ExMem, MemWb, WbEnd) {
    (ExMem::default(), MemWb::default(), WbEnd::default())
}

// ══════════════════════════════════════════════════════════
// 1. Single producer
// ══════════════════════════════════════════════════════════

#[test]
fn test_no_producer_uses_register_file() {
    let (ex, mw, we) = idle();
    let fwd = forward_operands(&consumer(add(1, 2, 3)), &ex, &mw, &we);
    assert_eq!((fwd.val_a, fwd.val_b), (-101, -102));
    assert_eq!(fwd.src_a, OperandSource::RegFile);
    assert_eq!(fwd.src_b, OperandSource::RegFile);
}

#[test]
fn test_forward_from_ex_mem_alu_result() {
    let (_, mw, we) = idle();
    let ex = ExMemBuilder::new().instr(add(0, 0, 1)).alu(11).build();
    let fwd = forward_operands(&consumer(add(1, 2, 3)), &ex, &mw, &we);
    assert_eq!((fwd.val_a, fwd.src_a), (11, OperandSource::ExMem));
    assert_eq!(fwd.src_b, OperandSource::RegFile);
}

#[test]
fn test_forward_from_mem_wb_into_field_b() {
    let (ex, _, we) = idle();
    let mw = mem_wb(nor(0, 0, 2), 22);
    let fwd = forward_operands(&consumer(sw(1, 2, 0)), &ex, &mw, &we);
    assert_eq!((fwd.val_b, fwd.src_b), (22, OperandSource::MemWb));
    assert_eq!(fwd.val_a, -101);
}

#[test]
fn test_forward_from_wb_end() {
    let (ex, mw, _) = idle();
    let we = wb_end(lw(0, 1, 0), 33);
    let fwd = forward_operands(&consumer(beq(1, 2, 0)), &ex, &mw, &we);
    assert_eq!((fwd.val_a, fwd.src_a), (33, OperandSource::WbEnd));
}

#[test]
fn test_one_producer_feeds_both_operands() {
    let (ex, mw, _) = idle();
    let we = wb_end(add(0, 0, 4), 9);
    let fwd = forward_operands(&consumer(add(4, 4, 5)), &ex, &mw, &we);
    assert_eq!((fwd.val_a, fwd.val_b), (9, 9));
}

// ══════════════════════════════════════════════════════════
// 2. Priority
// ══════════════════════════════════════════════════════════

#[test]
fn test_nearest_producer_wins() {
    let ex = ExMemBuilder::new().instr(add(0, 0, 1)).alu(3).build();
    let mw = mem_wb(add(0, 0, 1), 2);
    let we = wb_end(add(0, 0, 1), 1);

    let fwd = forward_operands(&consumer(add(1, 1, 6)), &ex, &mw, &we);
    assert_eq!((fwd.val_a, fwd.src_a), (3, OperandSource::ExMem));

    let fwd = forward_operands(&consumer(add(1, 1, 6)), &ExMem::default(), &mw, &we);
    assert_eq!((fwd.val_a, fwd.src_a), (2, OperandSource::MemWb));
}

#[test]
fn test_load_in_ex_mem_forwards_its_address() {
    // EX/MEM supplies aluResult; for a lw that is the address, which is why the
    // load-use stall exists.
    let (_, mw, we) = idle();
    let ex = ExMemBuilder::new().instr(lw(0, 1, 0)).alu(100).build();
    let fwd = forward_operands(&consumer(add(1, 2, 3)), &ex, &mw, &we);
    assert_eq!(fwd.val_a, 100);
}

// ══════════════════════════════════════════════════════════
// 3. Non-producers and non-consumers
// ══════════════════════════════════════════════════════════

#[test]
fn test_non_writing_producers_never_forward() {
    for producer in [sw(0, 1, 0), beq(1, 1, 0), halt(), noop(), jalr(1, 1)] {
        let ex = ExMemBuilder::new().instr(producer).alu(55).build();
        let mw = mem_wb(producer, 56);
        let we = wb_end(producer, 57);
        let fwd = forward_operands(&consumer(add(1, 1, 3)), &ex, &mw, &we);
        assert_eq!(fwd.src_a, OperandSource::RegFile, "{producer:#x}");
    }
}

#[test]
fn test_add_with_out_of_range_dest_never_forwards() {
    let ex = ExMemBuilder::new().instr(add(0, 0, 8)).alu(1).build();
    let (_, mw, we) = idle();
    let fwd = forward_operands(&consumer(add(0, 0, 3)), &ex, &mw, &we);
    assert_eq!(fwd.src_a, OperandSource::RegFile);
}

#[test]
fn test_non_reading_consumers_get_register_values() {
    let ex = ExMemBuilder::new().instr(add(0, 0, 1)).alu(99).build();
    let (_, mw, we) = idle();
    for instr in [halt(), noop(), jalr(1, 2)] {
        let fwd = forward_operands(&consumer(instr), &ex, &mw, &we);
        assert_eq!((fwd.val_a, fwd.val_b), (-101, -102), "{instr:#x}");
    }
}

// ══════════════════════════════════════════════════════════
// 4. Programs
// ══════════════════════════════════════════════════════════

#[test]
fn test_back_to_back_dependencies() {
    let mut ctx = TestContext::load_program(&[add(1, 2, 3), add(3, 3, 3), add(3, 1, 4), halt()])
        .with_reg(1, 3)
        .with_reg(2, 4);

    assert_eq!(ctx.run_to_halt(), 8);
    assert_eq!(ctx.get_reg(3), 14);
    assert_eq!(ctx.get_reg(4), 17);
    assert_eq!(ctx.sim.stats.stalls_data, 0);
}

#[test]
fn test_forward_across_two_noops_from_wb_end() {
    let mut ctx = TestContext::load_program(&[add(1, 2, 3), noop(), noop(), add(3, 3, 4), halt()])
        .with_reg(1, 3)
        .with_reg(2, 4);

    assert_eq!(ctx.run_to_halt(), 9);
    assert_eq!(ctx.get_reg(4), 14);
}

#[test]
fn test_store_receives_forwarded_value() {
    let mut ctx = TestContext::load_program(&[add(1, 2, 3), sw(0, 3, 10), halt()])
        .with_reg(1, 3)
        .with_reg(2, 4);

    assert_eq!(ctx.run_to_halt(), 7);
    assert_eq!(ctx.get_data(10), 7);
}

#[test]
fn test_loaded_value_forwarded_after_one_gap() {
    let program = [lw(0, 1, 5), noop(), sw(0, 1, 6), halt(), 0, 42];
    let mut ctx = TestContext::load_program(&program);

    assert_eq!(ctx.run_to_halt(), 8);
    assert_eq!(ctx.sim.stats.stalls_data, 0);
    assert_eq!(ctx.get_data(6), 42);
}

#[test]
fn test_nor_result_forwarded() {
    let mut ctx = TestContext::load_program(&[nor(1, 2, 3), add(3, 0, 4), halt()])
        .with_reg(1, 3)
        .with_reg(2, 4);

    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(3), -8);
    assert_eq!(ctx.get_reg(4), -8);
}

#[test]
fn test_discarded_write_is_not_forwarded_to_r0() {
    let mut ctx = TestContext::load_program(&[add(1, 2, 8), add(0, 0, 5), halt()])
        .with_reg(1, 3)
        .with_reg(2, 4);

    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(5), 0);
}
