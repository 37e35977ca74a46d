//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It handles `lw` and `sw`,
//! and it is where a `beq` resolves: branches are predicted not taken, so a taken
//! branch redirects the PC and voids the three younger instructions fetched behind it.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::InstructionBits;
use crate::isa::Opcode;

/// Executes the memory stage of the pipeline.
///
/// A store writes operand B into the next snapshot's data memory and passes the word
/// it overwrote on as `writeData`. A taken branch passes its ALU result through.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built. Fetch, Decode and Execute must already have run,
///   since a taken branch overrides what they produced.
///
/// # Returns
///
/// `Some(n)` if a taken branch squashed the pipeline, where `n` counts the voided
/// latches that held a real instruction. `None` otherwise.
pub fn mem_stage(cur: &Cpu, next: &mut Cpu) -> Option<u8> {
    let ex_mem = &cur.ex_mem;
    next.mem_wb.instr = ex_mem.instr;

    if ex_mem.eq && ex_mem.instr.op() == Some(Opcode::Beq) {
        next.pc = ex_mem.branch_target;
        let voided = [
            next.if_id.squash(),
            next.id_ex.squash(),
            next.ex_mem.squash(),
        ];
        next.mem_wb.write_data = ex_mem.alu_result;

        let squashed = voided.iter().filter(|&&v| v).count() as u8;
        debug!(
            cycle = next.cycles,
            target = ex_mem.branch_target,
            squashed,
            "branch taken, squashing younger instructions"
        );
        return Some(squashed);
    }

    next.mem_wb.write_data = match ex_mem.instr.op() {
        Some(Opcode::Lw) => cur.dmem.read(ex_mem.alu_result),
        Some(Opcode::Sw) => {
            next.dmem.write(ex_mem.alu_result, ex_mem.read_reg_b);
            cur.dmem.read(ex_mem.alu_result)
        }
        _ => ex_mem.alu_result,
    };
    None
}
