//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Size of the architectural register file.
//! 2. **Memory Constants:** Default capacity of instruction and data memory.
//! 3. **Pipeline Constants:** The canonical bubble encoding used to idle latches.

/// Number of general-purpose registers.
///
/// Register 0 is an ordinary register; it is not hard-wired to zero.
pub const NUM_REGS: usize = 8;

/// Default capacity of instruction and data memory, in words.
pub const DEFAULT_MEMORY_WORDS: usize = 65536;

/// Largest memory capacity, in words, that signed 32-bit addresses can reach.
pub const MAX_MEMORY_WORDS: usize = 1 << 31;

/// Canonical no-op encoding (`noop`, opcode 7 with all fields zero).
///
/// Every pipeline latch holds this value before cycle 0, and stalls and squashes
/// replace instructions with it.
pub const NOOP_INSTRUCTION: u32 = 7 << 22;
