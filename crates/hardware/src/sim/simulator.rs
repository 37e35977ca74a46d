//! Simulator: owns the current snapshot and drives the transition function.
//!
//! The engine itself is pure; this is the one place that holds a mutable binding to the
//! machine. Each tick replaces the snapshot with its successor and folds the cycle's
//! hazard signals into the run statistics.

use tracing::{debug, info};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine::{Transition, step};
use crate::core::pipeline::signals::CycleSignals;
use crate::sim::loader::Program;
use crate::stats::SimStats;

/// Top-level simulator: current machine snapshot plus run statistics.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The snapshot at the start of the next cycle.
    pub cpu: Cpu,
    /// Statistics gathered so far.
    pub stats: SimStats,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator with `program` loaded at address 0.
    ///
    /// # Arguments
    ///
    /// * `program` - The machine words to run.
    /// * `config` - Memory capacity and cycle bound.
    pub fn new(program: &Program, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let cpu = Cpu::new(program.words(), config)?;
        debug!(
            words = program.len(),
            capacity = config.memory.size,
            "program loaded"
        );
        Ok(Self::from_cpu(cpu, config.general.max_cycles))
    }

    /// Wraps an existing snapshot, for example one prepared by a test.
    pub fn from_cpu(cpu: Cpu, max_cycles: Option<u64>) -> Self {
        Self {
            cpu,
            stats: SimStats::default(),
            max_cycles,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Returns
    ///
    /// The stall and squash signals of the cycle.
    pub fn tick(&mut self) -> CycleSignals {
        let Transition { next, signals } = step(&self.cpu);
        self.cpu = next;
        self.stats.record(&signals, self.cpu.wb_end.instr);
        signals
    }

    /// Returns `true` once the `halt` instruction has retired.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Runs until the `halt` instruction retires.
    ///
    /// # Returns
    ///
    /// The total number of cycles executed, or `SimError::CycleLimit` if the configured
    /// bound is reached first.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.run_with(|_| {})
    }

    /// Runs until the `halt` instruction retires, showing every snapshot to `observe`
    /// before its cycle executes.
    ///
    /// The final, halted snapshot is not passed to `observe`; read it from `self.cpu`.
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<u64, SimError>
    where
        F: FnMut(&Cpu),
    {
        while !self.is_halted() {
            if let Some(limit) = self.max_cycles.filter(|&limit| self.cpu.cycles >= limit) {
                return Err(SimError::CycleLimit {
                    limit,
                    pc: self.cpu.pc,
                });
            }
            observe(&self.cpu);
            let _ = self.tick();
        }

        info!(cycles = self.cpu.cycles, "machine halted");
        Ok(self.cpu.cycles)
    }
}
