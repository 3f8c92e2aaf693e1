//! Configuration for the reference model.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants matching the companion hardware
//!    design's memory depth.
//! 2. **Structures:** Hierarchical config for general options and memory.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or via
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the reference model.
mod defaults {
    /// Capacity of the byte-addressable memory (1 KiB).
    ///
    /// Matches the data memory depth of the companion single-cycle design.
    /// The instruction image depth in words is `MEM_SIZE / 4`.
    pub const MEM_SIZE: usize = 1024;
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-instruction tracing event with the decoded fields.
    #[serde(default)]
    pub trace: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { trace: false }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity of the byte-addressable memory in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity.
    fn default_size() -> usize {
        defaults::MEM_SIZE
    }

    /// Memory depth in 32-bit words; also the instruction image depth.
    pub fn depth_words(&self) -> usize {
        self.size / 4
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEM_SIZE,
        }
    }
}

/// Root configuration for a model run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
