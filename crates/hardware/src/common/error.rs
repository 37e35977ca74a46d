//! Load and Simulation Error Definitions.
//!
//! The pipeline core has no runtime exceptions: every instruction word, valid or not,
//! has a defined transition. All failures therefore happen at the edges of a run:
//! 1. **Load Errors:** Unreadable or malformed machine-code input.
//! 2. **Configuration Errors:** Unreadable, malformed or inconsistent configuration.
//! 3. **Run Bounds:** A configured cycle limit reached before the halt retired.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning machine-code text into a [`Program`](crate::sim::loader::Program).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("can't open file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line did not start with a hexadecimal word.
    #[error("error in reading address {address}: {line:?}")]
    InvalidLine {
        /// Instruction-memory address the line would have been loaded at.
        address: usize,
        /// The offending line, without its line terminator.
        line: String,
    },

    /// The program does not fit into the configured memory.
    #[error("program has {words} words but memory holds only {capacity}")]
    TooLarge {
        /// Number of words in the program.
        words: usize,
        /// Configured memory capacity in words.
        capacity: usize,
    },
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Program loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration file could not be read.
    #[error("can't read configuration {}: {source}", path.display())]
    ConfigIo {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The run loop reached its cycle bound before the halt instruction retired.
    #[error("cycle limit of {limit} reached without halting (pc = {pc})")]
    CycleLimit {
        /// Configured maximum number of cycles.
        limit: u64,
        /// Program counter at the moment the limit was hit.
        pc: i32,
    },
}
