//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Forwarding:** Replaces stale operands with in-flight results.
//! 2. **ALU:** `add`, `nor` and the effective address of `lw`/`sw`.
//! 3. **Branch Resolution:** Computes the branch target and operand equality, which
//!    the Memory stage acts on.
//!
//! Opcodes without an ALU operation leave the EX/MEM ALU result as it was.

use crate::core::Cpu;
use crate::core::pipeline::hazards::forward_operands;
use crate::isa::Opcode;
use crate::isa::InstructionBits;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built.
pub fn execute_stage(cur: &Cpu, next: &mut Cpu) {
    let id_ex = &cur.id_ex;
    let fwd = forward_operands(id_ex, &cur.ex_mem, &cur.mem_wb, &cur.wb_end);
    let (a, b) = (fwd.val_a, fwd.val_b);

    let ex_mem = &mut next.ex_mem;
    ex_mem.read_reg_b = b;
    ex_mem.branch_target = id_ex.offset.wrapping_add(id_ex.pc_plus1);

    match id_ex.instr.op() {
        Some(Opcode::Lw | Opcode::Sw) => ex_mem.alu_result = a.wrapping_add(id_ex.offset),
        Some(Opcode::Nor) => ex_mem.alu_result = !(a | b),
        Some(Opcode::Add) => ex_mem.alu_result = a.wrapping_add(b),
        _ => {}
    }

    ex_mem.eq = a == b;
    ex_mem.instr = id_ex.instr;
}
