//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the stages of the
//! instruction pipeline. Every stage reads only the current snapshot and writes only
//! the next one, so the order they are called in affects nothing but which stage has
//! the last word on a shared field (the program counter and the IF/ID latch):
//! 1. **Fetch:** Reads the instruction at the PC into IF/ID.
//! 2. **Decode:** Reads the register operands and detects load-use stalls.
//! 3. **Execute:** Forwards operands, computes the ALU result and the branch outcome.
//! 4. **Memory:** Performs loads and stores, and resolves taken branches.
//! 5. **Writeback:** Commits results to the register file.
//! 6. **Retire:** Moves the written-back instruction into WB/END.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Retire stage implementation.
pub mod retire;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Retire stage entry point (WB/END).
pub use retire::retire_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
