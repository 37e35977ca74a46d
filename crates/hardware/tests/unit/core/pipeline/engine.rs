//! Transition Function Tests.
//!
//! Whole-cycle properties of `step`: it is pure, it advances the cycle counter by one,
//! fields nobody assigns carry over, and instructions that write no register never
//! change the register file.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use pipesim_core::config::{Config, GeneralConfig};
use pipesim_core::core::Cpu;
use pipesim_core::core::pipeline::engine::step;

use crate::common::builder::instruction::{add, beq, halt, noop, sw};
use crate::common::harness::TestContext;

#[test]
fn test_step_does_not_modify_current_snapshot() {
    let cpu = Cpu::new(&[add(0, 1, 2), halt()], &Config::default()).unwrap();
    let before = cpu.clone();

    let t = step(&cpu);

    assert_eq!(cpu, before);
    assert_eq!(t.next.cycles, 1);
    assert_eq!(t.next.pc, 1);
    assert_eq!(t.next.if_id.instr, add(0, 1, 2));
    assert!(!t.signals.stall);
    assert_eq!(t.signals.squash_depth, 0);
}

#[test]
fn test_step_method_matches_free_function() {
    let cpu = Cpu::new(&[add(0, 1, 2), halt()], &Config::default()).unwrap();
    assert_eq!(cpu.step().next, step(&cpu).next);
}

#[test]
fn test_simple_program_timing() {
    let mut ctx = TestContext::load_program(&[add(0, 1, 2), noop(), noop(), noop(), halt()]);

    assert_eq!(ctx.run_to_halt(), 9);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.sim.stats.stalls_data, 0);
    assert_eq!(ctx.cpu().pc, 9);
}

#[test]
fn test_unassigned_fields_carry_over() {
    let mut ctx = TestContext::load_program(&[add(0, 1, 2), noop(), halt()]).with_reg(1, 5);
    let _ = ctx.run(3);
    assert_eq!(ctx.cpu().ex_mem.instr, add(0, 1, 2));
    assert_eq!(ctx.cpu().ex_mem.alu_result, 5);

    let _ = ctx.step();

    assert_eq!(ctx.cpu().ex_mem.instr, noop());
    assert_eq!(ctx.cpu().ex_mem.alu_result, 5);
}

#[test]
fn test_registers_visible_only_after_writeback() {
    let mut ctx = TestContext::load_program(&[add(1, 1, 2), halt()]).with_reg(1, 4);
    let _ = ctx.run(4);
    assert_eq!(ctx.cpu().mem_wb.instr, add(1, 1, 2));
    assert_eq!(ctx.get_reg(2), 0);

    let _ = ctx.step();

    assert_eq!(ctx.get_reg(2), 8);
}

#[test]
fn test_stepping_after_halt_is_well_defined() {
    let mut ctx = TestContext::load_program(&[halt()]);
    let cycles = ctx.run_to_halt();
    let halted = ctx.cpu().clone();

    let t = step(&halted);

    assert_eq!(t.next.cycles, cycles + 1);
    assert_eq!(t.next.regs, halted.regs);
}

// ══════════════════════════════════════════════════════════
// Register invariance
// ══════════════════════════════════════════════════════════

fn non_writing_instruction() -> impl Strategy<Value = u32> {
    prop_oneof![
        (0usize..8, 0usize..8, -16i32..16).prop_map(|(a, b, off)| sw(a, b, off)),
        (0usize..8, 0usize..8).prop_map(|(a, b)| beq(a, b, 0)),
        Just(noop()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_non_writing_instructions_preserve_registers(
        body in prop::collection::vec(non_writing_instruction(), 0..12),
        regs in prop::array::uniform8(-20i32..20),
    ) {
        let mut program = body;
        program.push(halt());
        let config = Config {
            general: GeneralConfig { trace: false, max_cycles: Some(1_000) },
            ..Config::default()
        };
        let mut ctx = TestContext::with_config(&program, &config);
        for (i, &v) in regs.iter().enumerate() {
            ctx.cpu_mut().regs.write(i, v);
        }

        ctx.run_to_halt();

        prop_assert_eq!(ctx.cpu().regs.values(), &regs);
    }
}
