//! Machine State and Pipeline Engine.
//!
//! This module contains everything that changes from one cycle to the next:
//! 1. **CPU:** The machine snapshot (program counter, registers, memories, latches).
//! 2. **Pipeline:** Latches, hazard resolution, the five stages and the transition function.

/// The machine snapshot and its memories.
pub mod cpu;

/// The five-stage pipeline.
pub mod pipeline;

pub use cpu::Cpu;
pub use pipeline::engine::{Transition, step};
