//! Instruction Decode (ID) Stage.
//!
//! Reads the register operands named by fields A and B and sign-extends field C. When
//! the instruction depends on a `lw` still in Execute, Decode inserts a bubble instead:
//! ID/EX receives a `noop`, the PC is held and IF/ID keeps its instruction.

use tracing::debug;

use crate::common::constants::NOOP_INSTRUCTION;
use crate::core::Cpu;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::IdEx;
use crate::isa::InstructionBits;

/// Executes the decode stage of the pipeline.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built.
///
/// # Returns
///
/// `true` if the stage stalled on a load-use hazard.
pub fn decode_stage(cur: &Cpu, next: &mut Cpu) -> bool {
    let instr = cur.if_id.instr;
    next.id_ex = IdEx {
        instr,
        pc_plus1: cur.if_id.pc_plus1,
        read_reg_a: cur.regs.read(instr.field_a()),
        read_reg_b: cur.regs.read(instr.field_b()),
        offset: instr.offset(),
    };

    if !need_stall_load_use(&cur.id_ex, &cur.if_id) {
        return false;
    }

    debug!(
        cycle = next.cycles,
        pc = cur.pc,
        load_dest = cur.id_ex.instr.field_b(),
        "load-use stall"
    );
    next.id_ex.instr = NOOP_INSTRUCTION;
    next.pc = cur.pc;
    next.if_id = cur.if_id;
    true
}
