//! Simulation configuration.
//!
//! A [`SimConfig`] names the policies to run and the round-robin quantum.
//! It can be built in code or loaded from JSON; missing fields take their
//! defaults.
//!
//! ```
//! use cpu_schedule::config::SimConfig;
//! use cpu_schedule::scheduler::PolicyKind;
//!
//! let config = SimConfig::from_json_str(r#"{ "quantum": 4, "policies": ["sjf", "round-robin"] }"#).unwrap();
//! assert_eq!(config.quantum, 4);
//! assert_eq!(config.policies, vec![PolicyKind::Sjf, PolicyKind::RoundRobin]);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::Time;
use crate::scheduler::PolicyKind;

/// Default round-robin quantum (ticks).
pub const DEFAULT_QUANTUM: Time = 1;

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Round-robin time quantum (ticks, `> 0`).
    pub quantum: Time,
    /// Policies to run, in reporting order.
    pub policies: Vec<PolicyKind>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

impl SimConfig {
    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = PolicyKind>) -> Self {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Checks the settings.
    ///
    /// # Errors
    /// [`SimError::Config`] for a non-positive quantum or an empty policy list.
    pub fn validate(&self) -> Result<()> {
        if self.quantum <= 0 {
            return Err(SimError::config(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if self.policies.is_empty() {
            return Err(SimError::config("no policies selected"));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
