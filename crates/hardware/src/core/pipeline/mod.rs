//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The per-cycle transition from one snapshot to the next.
//! 2. **Hazards:** Load-use stall detection and operand forwarding.
//! 3. **Latches:** Inter-stage registers (IF/ID, ID/EX, EX/MEM, MEM/WB, WB/END).
//! 4. **Signals:** Stall and squash outcomes of a cycle.
//! 5. **Stages:** Fetch, Decode, Execute, Memory, Writeback and Retire.
//! 6. **Traits:** Common interface shared by all latches.

/// Per-cycle state transition.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Hazard outcomes reported for each cycle.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
