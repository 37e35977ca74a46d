//! Common types and constants shared across the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Register count, memory capacity and the bubble encoding.
//! 2. **Error Handling:** Load, configuration and run-bound errors.
//! 3. **Register Management:** The eight-entry architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading, configuration and run bounds.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DEFAULT_MEMORY_WORDS, MAX_MEMORY_WORDS, NOOP_INSTRUCTION, NUM_REGS};
pub use error::{LoadError, SimError};
pub use reg::RegisterFile;
