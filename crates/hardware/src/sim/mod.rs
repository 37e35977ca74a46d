//! Simulation utilities and program loading.
//!
//! Provides the pieces that sit around the pipeline engine:
//! 1. **Loader:** Parses machine-code text into a [`Program`](loader::Program).
//! 2. **Simulator:** Owns the current snapshot and runs it until the halt retires.
//! 3. **Dump:** Renders snapshots and program listings in the classic report format.

/// Human-readable state reports.
pub mod dump;

/// Machine-code loading.
pub mod loader;

/// The run loop and halt detection.
pub mod simulator;

pub use simulator::Simulator;
