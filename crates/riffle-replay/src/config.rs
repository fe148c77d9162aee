//! Replay configuration and validation.

use std::error::Error;
use std::fmt;

/// Errors detected during [`ReplayConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The bank would have zero slots.
    NoVariables,
    /// The branching hint is outside the supported range.
    InvalidBranching {
        /// The rejected value.
        bits: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVariables => write!(f, "variable_count must be at least 1"),
            Self::InvalidBranching { bits } => {
                write!(f, "branching_bits must be in [1, 8], got {bits}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Configuration for one replay run.
///
/// # Examples
///
/// ```
/// use riffle_replay::ReplayConfig;
///
/// let config = ReplayConfig::default();
/// assert_eq!(config.variable_count, 8);
/// assert_eq!(config.branching_bits, 3);
/// assert!(!config.trace_enabled);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Number of slots in the variable bank. Default: 8. Slot indices
    /// are decoded from single bytes, capping this at 255.
    pub variable_count: u8,
    /// Structural fan-out hint (log2 of the branching factor) forwarded
    /// to the vector backend. Default: 3 — a deliberately small fan-out
    /// so short inputs already exercise multi-level trees. Backends with
    /// a fixed fan-out ignore it.
    pub branching_bits: u32,
    /// Whether the run records a human-readable trace of every applied
    /// operation. Default: false.
    pub trace_enabled: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            variable_count: 8,
            branching_bits: 3,
            trace_enabled: false,
        }
    }
}

impl ReplayConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variable_count == 0 {
            return Err(ConfigError::NoVariables);
        }
        if !(1..=8).contains(&self.branching_bits) {
            return Err(ConfigError::InvalidBranching { bits: self.branching_bits });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ReplayConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_variables_rejected() {
        let cfg = ReplayConfig { variable_count: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoVariables));
    }

    #[test]
    fn branching_bounds_enforced() {
        for bits in [0u32, 9, 32] {
            let cfg = ReplayConfig { branching_bits: bits, ..Default::default() };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidBranching { bits }));
        }
        for bits in 1..=8u32 {
            let cfg = ReplayConfig { branching_bits: bits, ..Default::default() };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn max_variable_count_validates() {
        let cfg = ReplayConfig { variable_count: 255, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }
}
