//! LC-2K Five-Stage Pipeline Simulator.
//!
//! This crate models, cycle by cycle, a classic five-stage pipelined processor running the
//! LC-2K instruction set. It reproduces the exact architectural state the hardware would
//! show, including load-use stalls, operand forwarding and branch squashes.
//! 1. **ISA:** Decoding, encoding and disassembly of 32-bit LC-2K words.
//! 2. **Core:** The machine snapshot, its memories, the pipeline latches and the
//!    per-cycle transition function.
//! 3. **Simulation:** Program loading, the run loop with halt detection, and the
//!    per-cycle state report.
//! 4. **Configuration and Statistics:** JSON configuration and run metrics.

/// Common types: constants, errors and the register file.
pub mod common;

/// Simulator configuration.
pub mod config;

/// Machine state and the pipeline engine.
pub mod core;

/// Instruction set definitions.
pub mod isa;

/// Program loading, the run loop and state reporting.
pub mod sim;

/// Run statistics.
pub mod stats;

pub use crate::common::{LoadError, SimError};
pub use crate::config::Config;
pub use crate::core::Cpu;
pub use crate::sim::Simulator;
pub use crate::sim::loader::Program;
