//! Instruction and Data Memory.
//!
//! Both memories are word-addressed and sized by `memory.size`. Instruction memory is
//! fixed once the program is loaded and is shared between snapshots. Data memory is
//! stored sparsely: only the prefix up to the highest written address is allocated, so
//! copying a snapshot each cycle stays proportional to the words actually in use.

use std::sync::Arc;

use tracing::warn;

/// Read-only instruction memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Arc<[u32]>,
}

impl InstructionMemory {
    /// Creates instruction memory holding `program` at address 0.
    pub fn new(program: &[u32]) -> Self {
        Self {
            words: Arc::from(program),
        }
    }

    /// Fetches the word at `pc`.
    ///
    /// Addresses past the loaded program hold zero, the encoding of `add 0 0 0`.
    #[inline]
    pub fn fetch(&self, pc: i32) -> u32 {
        usize::try_from(pc)
            .ok()
            .and_then(|idx| self.words.get(idx).copied())
            .unwrap_or(0)
    }

    /// Number of words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no program is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The loaded words in address order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

/// Word-addressed data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
    capacity: usize,
}

impl DataMemory {
    /// Creates data memory of `capacity` words whose low addresses mirror `program`.
    pub fn new(program: &[u32], capacity: usize) -> Self {
        Self {
            words: program.iter().map(|&w| w as i32).collect(),
            capacity,
        }
    }

    /// Capacity in words.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads the word at `addr`.
    ///
    /// Addresses outside `0..capacity` read as 0.
    pub fn read(&self, addr: i32) -> i32 {
        match self.index(addr) {
            Some(idx) => self.words.get(idx).copied().unwrap_or(0),
            None => {
                warn!(addr, capacity = self.capacity, "load outside data memory reads 0");
                0
            }
        }
    }

    /// Writes `val` at `addr`.
    ///
    /// Stores outside `0..capacity` are dropped.
    pub fn write(&mut self, addr: i32, val: i32) {
        let Some(idx) = self.index(addr) else {
            warn!(addr, val, capacity = self.capacity, "store outside data memory dropped");
            return;
        };
        if idx >= self.words.len() {
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] = val;
    }

    /// Reads the word at an in-range index without logging. Used by state reports.
    pub fn get(&self, idx: usize) -> i32 {
        self.words.get(idx).copied().unwrap_or(0)
    }

    fn index(&self, addr: i32) -> Option<usize> {
        usize::try_from(addr).ok().filter(|&idx| idx < self.capacity)
    }
}
