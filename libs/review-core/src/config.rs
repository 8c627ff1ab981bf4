//! Scheduler tuning.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// SM-2 parameters. Defaults match the canonical algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Floor the ease factor never drops below.
    pub min_ease_factor: f64,
    pub initial_ease_factor: f64,
    /// Interval after a failed review and after the first success.
    pub initial_interval: u32,
    /// Interval after the second consecutive success.
    pub second_interval: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_ease_factor: 1.3,
            initial_ease_factor: 2.5,
            initial_interval: 1,
            second_interval: 6,
        }
    }
}

impl SchedulerConfig {
    /// Check that the tuning keeps the record invariants satisfiable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ease_factor <= 0.0 {
            return Err(ConfigError::NonPositiveMinimumEase(self.min_ease_factor));
        }
        if self.initial_ease_factor < self.min_ease_factor {
            return Err(ConfigError::InitialEaseBelowMinimum {
                initial: self.initial_ease_factor,
                minimum: self.min_ease_factor,
            });
        }
        if self.initial_interval == 0 {
            return Err(ConfigError::ZeroInterval { name: "initial" });
        }
        if self.second_interval == 0 {
            return Err(ConfigError::ZeroInterval { name: "second" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SchedulerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SchedulerConfig = serde_json::from_str(r#"{"min_ease_factor": 1.5}"#).unwrap();
        assert_eq!(
            config,
            SchedulerConfig {
                min_ease_factor: 1.5,
                ..Default::default()
            }
        );
    }

    #[test]
    fn reject_initial_ease_below_floor() {
        let config = SchedulerConfig {
            initial_ease_factor: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialEaseBelowMinimum { .. })
        ));
    }

    #[test]
    fn reject_zero_interval() {
        let config = SchedulerConfig {
            second_interval: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval { name: "second" })
        );
    }

    #[test]
    fn reject_non_positive_floor() {
        let config = SchedulerConfig {
            min_ease_factor: 0.0,
            initial_ease_factor: 2.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveMinimumEase(0.0))
        );
    }
}
