//! CPU Snapshot Definition and Initialization.
//!
//! This module defines the `Cpu` structure, a complete and self-contained snapshot of the
//! machine between two clock edges. It holds the following:
//! 1. **Architectural State:** Program counter, register file, cycle counter.
//! 2. **Memories:** Shared read-only instruction memory and word-addressed data memory.
//! 3. **Pipeline Latches:** IF/ID, ID/EX, EX/MEM, MEM/WB and WB/END.
//!
//! Snapshots are values. The transition function in
//! [`engine`](crate::core::pipeline::engine) reads one and builds the next; nothing
//! mutates the snapshot a stage is reading from.

/// Instruction and data memory.
pub mod memory;

use crate::common::{LoadError, RegisterFile};
use crate::config::Config;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::{InstructionBits, Opcode};

pub use memory::{DataMemory, InstructionMemory};

/// Complete machine state before a cycle starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// Address of the next instruction to fetch.
    pub pc: i32,
    /// Number of cycles completed.
    pub cycles: u64,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program text.
    pub imem: InstructionMemory,
    /// Data memory, initially a copy of the program.
    pub dmem: DataMemory,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// WB/END latch, holding the most recently retired instruction.
    pub wb_end: WbEnd,
}

impl Cpu {
    /// Builds the initial snapshot for a program.
    ///
    /// The program is loaded at address 0 of instruction memory and mirrored into data
    /// memory. Registers, the program counter and the cycle counter start at zero and
    /// every latch holds a `noop`.
    ///
    /// # Arguments
    ///
    /// * `program` - Machine words in address order.
    /// * `config` - Supplies the memory capacity.
    ///
    /// # Returns
    ///
    /// The initial snapshot, or `LoadError::TooLarge` if the program does not fit.
    pub fn new(program: &[u32], config: &Config) -> Result<Self, LoadError> {
        let capacity = config.memory.size;
        if program.len() > capacity {
            return Err(LoadError::TooLarge {
                words: program.len(),
                capacity,
            });
        }
        Ok(Self {
            pc: 0,
            cycles: 0,
            regs: RegisterFile::new(),
            imem: InstructionMemory::new(program),
            dmem: DataMemory::new(program, capacity),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_end: WbEnd::default(),
        })
    }

    /// Number of words loaded from the program file.
    pub fn num_memory(&self) -> usize {
        self.imem.len()
    }

    /// Returns `true` once a `halt` has reached WB/END.
    pub fn is_halted(&self) -> bool {
        self.wb_end.instr.op() == Some(Opcode::Halt)
    }
}
