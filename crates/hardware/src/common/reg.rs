//! Architectural Register File.
//!
//! Eight 32-bit signed registers. There is no hard-wired zero register: register 0 is
//! read and written like any other.

use crate::common::constants::NUM_REGS;

/// Register file holding the eight general-purpose registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register file from explicit values.
    pub const fn from_values(regs: [i32; NUM_REGS]) -> Self {
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Indices come from 3-bit instruction fields and are
    ///   always in range; an out-of-range index reads as 0.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes a register. Out-of-range indices are ignored.
    pub fn write(&mut self, idx: usize, val: i32) {
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Returns all register values in index order.
    pub const fn values(&self) -> &[i32; NUM_REGS] {
        &self.regs
    }
}
