//! State Reports.
//!
//! Renders a snapshot in the classic LC-2K pipeline report format. Latch fields that
//! carry no meaning for the instruction in the latch are printed anyway, followed by
//! `(Don't Care)`; their values are whatever the latch held before, and reports are
//! compared byte for byte, so those leftovers matter.
//!
//! The rules key off the raw opcode value (`word >> 22`). Words with an unknown opcode
//! compare above every real opcode and are treated like `halt`/`noop`.

use std::fmt;

use crate::core::Cpu;
use crate::isa::InstructionBits;
use crate::isa::Opcode;
use crate::isa::disasm::disassemble;

const DONT_CARE: &str = " (Don't Care)";

/// Display adapter printing the full state of a snapshot.
///
/// ```
/// use pipesim_core::{Config, Cpu};
/// use pipesim_core::sim::dump::StateDump;
///
/// let cpu = Cpu::new(&[0x0180_0000], &Config::default()).unwrap();
/// let report = StateDump(&cpu).to_string();
/// assert!(report.starts_with("\n@@@\nstate before cycle 0 starts:\n\tpc = 0\n"));
/// assert!(report.ends_with("end state\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StateDump<'a>(pub &'a Cpu);

/// Display adapter printing the `instruction memory:` listing shown at load time.
#[derive(Clone, Copy, Debug)]
pub struct ProgramListing<'a>(pub &'a [u32]);

fn dont_care(cond: bool) -> &'static str {
    if cond { DONT_CARE } else { "" }
}

impl fmt::Display for StateDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.0;

        writeln!(f, "\n@@@")?;
        writeln!(f, "state before cycle {} starts:", cpu.cycles)?;
        writeln!(f, "\tpc = {}", cpu.pc)?;

        writeln!(f, "\tdata memory:")?;
        for i in 0..cpu.num_memory() {
            writeln!(f, "\t\tdataMem[ {i} ] = 0x{:08X}", cpu.dmem.get(i))?;
        }
        writeln!(f, "\tregisters:")?;
        for (i, val) in cpu.regs.values().iter().enumerate() {
            writeln!(f, "\t\treg[ {i} ] = {val}")?;
        }

        let if_id = &cpu.if_id;
        let if_op = if_id.instr.opcode();
        writeln!(f, "\tIF/ID pipeline register:")?;
        write_instruction(f, if_id.instr)?;
        writeln!(
            f,
            "\t\tpcPlus1 = {}{}",
            if_id.pc_plus1,
            dont_care(if_op == Opcode::Noop.raw())
        )?;

        let id_ex = &cpu.id_ex;
        let id_op = id_ex.instr.opcode();
        writeln!(f, "\tID/EX pipeline register:")?;
        write_instruction(f, id_ex.instr)?;
        writeln!(
            f,
            "\t\tpcPlus1 = {}{}",
            id_ex.pc_plus1,
            dont_care(id_op == Opcode::Noop.raw())
        )?;
        writeln!(
            f,
            "\t\treadRegA = {}{}",
            id_ex.read_reg_a,
            dont_care(id_op >= Opcode::Halt.raw())
        )?;
        writeln!(
            f,
            "\t\treadRegB = {}{}",
            id_ex.read_reg_b,
            dont_care(id_op == Opcode::Lw.raw() || id_op > Opcode::Beq.raw())
        )?;
        writeln!(
            f,
            "\t\toffset = {}{}",
            id_ex.offset,
            dont_care(!matches!(
                id_ex.instr.op(),
                Some(Opcode::Lw | Opcode::Sw | Opcode::Beq)
            ))
        )?;

        let ex_mem = &cpu.ex_mem;
        let ex_op = ex_mem.instr.opcode();
        let not_beq = ex_op != Opcode::Beq.raw();
        writeln!(f, "\tEX/MEM pipeline register:")?;
        write_instruction(f, ex_mem.instr)?;
        writeln!(
            f,
            "\t\tbranchTarget {}{}",
            ex_mem.branch_target,
            dont_care(not_beq)
        )?;
        writeln!(
            f,
            "\t\teq ? {}{}",
            if ex_mem.eq { "True" } else { "False" },
            dont_care(not_beq)
        )?;
        writeln!(
            f,
            "\t\taluResult = {}{}",
            ex_mem.alu_result,
            dont_care(ex_op > Opcode::Sw.raw())
        )?;
        writeln!(
            f,
            "\t\treadRegB = {}{}",
            ex_mem.read_reg_b,
            dont_care(ex_op != Opcode::Sw.raw())
        )?;

        let mem_wb = &cpu.mem_wb;
        writeln!(f, "\tMEM/WB pipeline register:")?;
        write_instruction(f, mem_wb.instr)?;
        writeln!(
            f,
            "\t\twriteData = {}{}",
            mem_wb.write_data,
            dont_care(mem_wb.instr.opcode() >= Opcode::Sw.raw())
        )?;

        let wb_end = &cpu.wb_end;
        writeln!(f, "\tWB/END pipeline register:")?;
        write_instruction(f, wb_end.instr)?;
        writeln!(
            f,
            "\t\twriteData = {}{}",
            wb_end.write_data,
            dont_care(wb_end.instr.opcode() >= Opcode::Sw.raw())
        )?;

        writeln!(f, "end state")
    }
}

fn write_instruction(f: &mut fmt::Formatter<'_>, instr: u32) -> fmt::Result {
    writeln!(f, "\t\tinstruction = 0x{instr:08X} ( {} )", disassemble(instr))
}

impl fmt::Display for ProgramListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instruction memory:")?;
        for (i, &word) in self.0.iter().enumerate() {
            writeln!(f, "\tinstrMem[ {i} ] = 0x{word:08X} ( {} )", disassemble(word))?;
        }
        Ok(())
    }
}
