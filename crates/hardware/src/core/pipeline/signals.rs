//! Per-Cycle Hazard Signals.
//!
//! The transition function reports what the hazard logic did during a cycle so the run
//! loop, statistics and tests can observe stalls and squashes without diffing snapshots.

/// Number of latches voided by a taken branch (IF/ID, ID/EX and EX/MEM).
pub const BRANCH_SQUASH_DEPTH: u8 = 3;

/// Hazard outcome of one cycle.
///
/// A stall and a squash never both appear: when a taken branch resolves in the same
/// cycle a load-use stall is detected, the squash replaces the stalled instruction and
/// only the squash is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleSignals {
    /// Decode held back the instruction in IF/ID and issued a bubble.
    pub stall: bool,
    /// Number of younger latches voided by a taken branch, 0 or 3.
    pub squash_depth: u8,
    /// How many of the voided latches held a real instruction rather than a `noop`.
    pub squashed: u8,
}

impl CycleSignals {
    /// Returns `true` if a taken branch redirected the pipeline this cycle.
    pub const fn squashed_any(&self) -> bool {
        self.squash_depth > 0
    }
}
