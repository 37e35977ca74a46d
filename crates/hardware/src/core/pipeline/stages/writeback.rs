//! Writeback (WB) Stage.

use crate::core::Cpu;
use crate::isa::InstructionBits;

/// Executes the writeback stage of the pipeline.
///
/// `add` and `nor` write field C, `lw` writes field B. Nothing else touches the register
/// file. The write lands in the next snapshot, so Decode in this same cycle still reads
/// the old value and relies on forwarding from WB/END.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle.
/// * `next` - The snapshot being built.
pub fn wb_stage(cur: &Cpu, next: &mut Cpu) {
    if let Some(dest) = cur.mem_wb.instr.dest_reg() {
        next.regs.write(dest, cur.mem_wb.write_data);
    }
}
