//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline memory capacity and trace behavior.
//! 2. **Structures:** Hierarchical config with `general` and `memory` sections.
//! 3. **Validation:** Rejection of configurations the machine cannot be built from.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or taken from `Config::default()`.
//! Every field is optional in the JSON document.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants::MAX_MEMORY_WORDS;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_MEMORY_WORDS;

    /// Instruction and data memory capacity in words.
    pub const fn memory_size() -> usize {
        DEFAULT_MEMORY_WORDS
    }

    /// Per-cycle state dumps are on unless disabled.
    pub const fn trace() -> bool {
        true
    }
}

/// Root configuration structure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Run-level settings.
    pub general: GeneralConfig,
    /// Memory sizing.
    pub memory: MemoryConfig,
}

/// Run-level settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Print the machine state before every cycle.
    #[serde(default = "defaults::trace")]
    pub trace: bool,
    /// Upper bound on the number of cycles a run may take. `None` runs until halt.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: defaults::trace(),
            max_cycles: None,
        }
    }
}

/// Memory sizing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Capacity of instruction and data memory, in words.
    #[serde(default = "defaults::memory_size")]
    pub size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::memory_size(),
        }
    }
}

impl Config {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text. Missing sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The validated configuration, or `SimError::Config` / `SimError::InvalidConfig`.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Returns
    ///
    /// The validated configuration, `SimError::ConfigIo` if the file cannot be read,
    /// or any error of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that the configuration describes a machine that can be built.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.memory.size == 0 {
            return Err(SimError::InvalidConfig(
                "memory.size must be at least one word".to_string(),
            ));
        }
        if self.memory.size > MAX_MEMORY_WORDS {
            return Err(SimError::InvalidConfig(format!(
                "memory.size must not exceed {MAX_MEMORY_WORDS} words"
            )));
        }
        if self.general.max_cycles == Some(0) {
            return Err(SimError::InvalidConfig(
                "general.max_cycles must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
