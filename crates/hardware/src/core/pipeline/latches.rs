//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch is the snapshot one stage hands to the next, valid for exactly one cycle:
//! Fetch → IF/ID → Decode → ID/EX → Execute → EX/MEM → Memory → MEM/WB → Writeback → WB/END.
//!
//! A stage only assigns the fields it produces for the instruction it is handling. Any
//! other field keeps the value it held in the previous cycle; the state report marks
//! those values as "Don't Care".

use crate::common::constants::NOOP_INSTRUCTION;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Fetched instruction word.
    pub instr: u32,
    /// Address of the fetched instruction plus one.
    pub pc_plus1: i32,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Instruction word.
    pub instr: u32,
    /// Address of the instruction plus one.
    pub pc_plus1: i32,
    /// Register file value named by field A.
    pub read_reg_a: i32,
    /// Register file value named by field B.
    pub read_reg_b: i32,
    /// Field C sign-extended.
    pub offset: i32,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Instruction word.
    pub instr: u32,
    /// `offset + pcPlus1`, the target if this is a taken `beq`.
    pub branch_target: i32,
    /// Whether the two (forwarded) operands compared equal.
    pub eq: bool,
    /// ALU output: the sum, the nor, or the effective address.
    pub alu_result: i32,
    /// Operand B after forwarding; the value a `sw` stores.
    pub read_reg_b: i32,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Instruction word.
    pub instr: u32,
    /// Value headed for the register file.
    pub write_data: i32,
}

/// WB/END latch: the instruction that retired in the previous cycle.
///
/// Kept so its result can still be forwarded one cycle after writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WbEnd {
    /// Instruction word.
    pub instr: u32,
    /// Value written to the register file.
    pub write_data: i32,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
        }
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
            read_reg_a: 0,
            read_reg_b: 0,
            offset: 0,
        }
    }
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            branch_target: 0,
            eq: false,
            alu_result: 0,
            read_reg_b: 0,
        }
    }
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

impl Default for WbEnd {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

impl From<MemWb> for WbEnd {
    fn from(mem_wb: MemWb) -> Self {
        Self {
            instr: mem_wb.instr,
            write_data: mem_wb.write_data,
        }
    }
}
