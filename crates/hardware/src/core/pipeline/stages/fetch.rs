//! Instruction Fetch (IF) Stage.

use tracing::trace;

use crate::core::Cpu;

/// Executes the fetch stage of the pipeline.
///
/// Reads `imem[pc]` into IF/ID together with `pc + 1`, and advances the PC. A stall in
/// Decode or a taken branch in Memory may override both in the same cycle.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built.
pub fn fetch_stage(cur: &Cpu, next: &mut Cpu) {
    let instr = cur.imem.fetch(cur.pc);
    let pc_plus1 = cur.pc.wrapping_add(1);

    trace!(pc = cur.pc, instr, "fetch");

    next.if_id.instr = instr;
    next.if_id.pc_plus1 = pc_plus1;
    next.pc = pc_plus1;
}
