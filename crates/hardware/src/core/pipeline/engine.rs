//! Per-Cycle State Transition.
//!
//! The engine is a pure function from one machine snapshot to the next. It runs the six
//! stages against the current snapshot in a fixed order, each writing its own slice of
//! the next snapshot:
//! 1. **Copy:** The next snapshot starts as a copy of the current one, so fields a stage
//!    does not assign keep their previous value.
//! 2. **Stages:** Fetch, Decode, Execute, Memory, Writeback, Retire.
//! 3. **Signals:** Stall and squash outcomes are returned alongside the new snapshot.
//!
//! Halt detection belongs to the run loop; stepping a halted machine is well defined
//! and simply keeps draining the pipeline.

use crate::core::Cpu;
use crate::core::pipeline::signals::{BRANCH_SQUASH_DEPTH, CycleSignals};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, retire_stage, wb_stage,
};

/// Result of advancing the machine by one cycle.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The snapshot at the start of the following cycle.
    pub next: Cpu,
    /// What the hazard logic did during the cycle.
    pub signals: CycleSignals,
}

/// Advances the machine by one clock cycle.
///
/// # Arguments
///
/// * `cur` - The snapshot at the start of the cycle. It is not modified.
///
/// # Returns
///
/// The next snapshot and the cycle's hazard signals.
pub fn step(cur: &Cpu) -> Transition {
    let mut next = cur.clone();
    next.cycles += 1;

    fetch_stage(cur, &mut next);
    let stalled = decode_stage(cur, &mut next);
    execute_stage(cur, &mut next);
    let squashed = mem_stage(cur, &mut next);
    wb_stage(cur, &mut next);
    retire_stage(cur, &mut next);

    let signals = match squashed {
        Some(squashed) => CycleSignals {
            stall: false,
            squash_depth: BRANCH_SQUASH_DEPTH,
            squashed,
        },
        None => CycleSignals {
            stall: stalled,
            ..CycleSignals::default()
        },
    };
    debug_assert!(
        !(signals.stall && signals.squash_depth > 0),
        "a cycle reports either a stall or a squash"
    );

    Transition { next, signals }
}

impl Cpu {
    /// Advances this snapshot by one cycle. See [`step`].
    pub fn step(&self) -> Transition {
        step(self)
    }
}
