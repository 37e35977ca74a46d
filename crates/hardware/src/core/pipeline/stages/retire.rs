//! Retire Stage.

use tracing::debug;

use crate::core::Cpu;
use crate::isa::{InstructionBits, Opcode};

/// Moves the instruction leaving Writeback into WB/END.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built.
pub fn retire_stage(cur: &Cpu, next: &mut Cpu) {
    next.wb_end = cur.mem_wb.into();

    if cur.mem_wb.instr.op() == Some(Opcode::Halt) {
        debug!(cycle = next.cycles, "halt retired");
    }
}
