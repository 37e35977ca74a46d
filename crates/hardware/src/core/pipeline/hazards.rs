//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file from EX/MEM, MEM/WB and WB/END.

use std::fmt;

use tracing::trace;

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::InstructionBits;
use crate::isa::opcodes::{HazardFields, Opcode, info_of};

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode names, as a source, the
/// register that the `lw` currently in Execute will load. The loaded value only exists
/// after the Memory stage, one cycle too late to forward into Execute.
///
/// A `lw` in decode is checked on field A only, since its field B is a destination.
/// Every other word, including `noop` and `halt`, is checked on fields A and B.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction now in Execute.
/// * `if_id` - The IF/ID latch holding the instruction now in Decode.
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if id_ex.instr.op() != Some(Opcode::Lw) {
        return false;
    }

    let load_dest = id_ex.instr.field_b();
    let next = if_id.instr;
    match info_of(next.op()).hazard_fields {
        HazardFields::FieldA => next.field_a() == load_dest,
        HazardFields::FieldsAB => next.field_a() == load_dest || next.field_b() == load_dest,
    }
}

/// Where an operand value entering Execute came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperandSource {
    /// The value read from the register file during Decode.
    #[default]
    RegFile,
    /// Forwarded from the instruction that retired last cycle.
    WbEnd,
    /// Forwarded from the instruction now in Writeback.
    MemWb,
    /// Forwarded from the ALU result of the instruction now in Memory.
    ExMem,
}

impl fmt::Display for OperandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RegFile => "RegFile",
            Self::WbEnd => "WB/END",
            Self::MemWb => "MEM/WB",
            Self::ExMem => "EX/MEM",
        };
        f.write_str(name)
    }
}

/// Operand values for the instruction in Execute, after forwarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forwarded {
    /// Operand A (field A).
    pub val_a: i32,
    /// Operand B (field B).
    pub val_b: i32,
    /// Origin of operand A.
    pub src_a: OperandSource,
    /// Origin of operand B.
    pub src_b: OperandSource,
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// Producers are applied oldest first (WB/END, then MEM/WB, then EX/MEM), so the nearest
/// producer of a register wins. Only `add`/`nor` (destination field C) and `lw`
/// (destination field B) produce values. EX/MEM supplies its ALU result, which is why a
/// `lw` there is never a useful producer and the load-use stall exists.
///
/// `jalr`, `halt` and `noop` in Execute consume nothing and always see the values read
/// in Decode.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch (the consumer).
/// * `ex_mem` - The EX/MEM latch from the current snapshot.
/// * `mem_wb` - The MEM/WB latch from the current snapshot.
/// * `wb_end` - The WB/END latch from the current snapshot.
///
/// # Returns
///
/// The operand values with their sources.
pub fn forward_operands(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb, wb_end: &WbEnd) -> Forwarded {
    let mut fwd = Forwarded {
        val_a: id_ex.read_reg_a,
        val_b: id_ex.read_reg_b,
        src_a: OperandSource::RegFile,
        src_b: OperandSource::RegFile,
    };

    let consumer = id_ex.instr;
    if !info_of(consumer.op()).reads_registers {
        return fwd;
    }

    let producers = [
        (OperandSource::WbEnd, wb_end.instr, wb_end.write_data),
        (OperandSource::MemWb, mem_wb.instr, mem_wb.write_data),
        (OperandSource::ExMem, ex_mem.instr, ex_mem.alu_result),
    ];

    for (src, producer, value) in producers {
        let Some(dest) = producer.dest_reg() else {
            continue;
        };
        if consumer.field_a() == dest {
            fwd.val_a = value;
            fwd.src_a = src;
        }
        if consumer.field_b() == dest {
            fwd.val_b = value;
            fwd.src_b = src;
        }
    }

    if fwd.src_a != OperandSource::RegFile || fwd.src_b != OperandSource::RegFile {
        trace!(
            a = fwd.val_a,
            a_src = %fwd.src_a,
            b = fwd.val_b,
            b_src = %fwd.src_b,
            "forwarded operands"
        );
    }

    fwd
}
