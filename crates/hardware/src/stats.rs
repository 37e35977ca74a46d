//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a pipeline run. It provides:
//! 1. **Cycles and CPI:** Total cycles, retired instructions and cycles per instruction.
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store, branch).
//! 3. **Hazards:** Load-use stall cycles, taken branches and squashed instructions.

use std::fmt;

use crate::core::pipeline::signals::CycleSignals;
use crate::isa::{InstructionBits, Opcode};

/// Simulation statistics structure tracking all performance metrics.
///
/// An instruction counts as retired when it reaches WB/END. Words with the `noop`
/// opcode are not counted, whatever their field bits; the `halt` is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// `add` and `nor` instructions retired.
    pub inst_alu: u64,
    /// `lw` instructions retired.
    pub inst_load: u64,
    /// `sw` instructions retired.
    pub inst_store: u64,
    /// `beq` instructions retired, taken or not.
    pub inst_branch: u64,
    /// Everything else retired: `jalr`, `halt` and data words run as code.
    pub inst_other: u64,

    /// Branches that were taken and redirected fetch.
    pub branches_taken: u64,
    /// Cycles in which Decode stalled on a load-use hazard.
    pub stalls_data: u64,
    /// Number of pipeline squashes.
    pub squash_events: u64,
    /// Real instructions voided by squashes.
    pub squashed_instructions: u64,
}

impl SimStats {
    /// Folds one cycle into the statistics.
    ///
    /// # Arguments
    ///
    /// * `signals` - Hazard signals of the cycle.
    /// * `retired` - The instruction that entered WB/END during the cycle.
    pub fn record(&mut self, signals: &CycleSignals, retired: u32) {
        self.cycles += 1;

        if signals.stall {
            self.stalls_data += 1;
        }
        if signals.squashed_any() {
            self.squash_events += 1;
            self.branches_taken += 1;
            self.squashed_instructions += u64::from(signals.squashed);
        }

        let op = retired.op();
        if op == Some(Opcode::Noop) {
            return;
        }
        self.instructions_retired += 1;
        match op {
            Some(Opcode::Add | Opcode::Nor) => self.inst_alu += 1,
            Some(Opcode::Lw) => self.inst_load += 1,
            Some(Opcode::Sw) => self.inst_store += 1,
            Some(Opcode::Beq) => self.inst_branch += 1,
            _ => self.inst_other += 1,
        }
    }

    /// Cycles per retired instruction, or 0 before anything has retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64, of: u64| {
            if of == 0 {
                0.0
            } else {
                (n as f64 / of as f64) * 100.0
            }
        };
        let retired = self.instructions_retired;

        writeln!(f, "\n==========================================================")?;
        writeln!(f, "LC-2K PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {retired}")?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("branch", self.inst_branch),
            ("other", self.inst_other),
        ] {
            writeln!(f, "  op.{name:<20} {n} ({:.2}%)", pct(n, retired))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HAZARDS")?;
        writeln!(
            f,
            "  stalls.data            {} ({:.2}% of cycles)",
            self.stalls_data,
            pct(self.stalls_data, self.cycles)
        )?;
        writeln!(
            f,
            "  branch.taken           {} ({:.2}% of branches)",
            self.branches_taken,
            pct(self.branches_taken, self.inst_branch)
        )?;
        writeln!(f, "  squash.events          {}", self.squash_events)?;
        writeln!(f, "  squash.instructions    {}", self.squashed_instructions)?;
        writeln!(f, "==========================================================")
    }
}
