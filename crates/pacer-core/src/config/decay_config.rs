use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Decay controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Fraction of the distance to the asymptote retained after one step (0 < rate < 1).
    pub rate: f64,
    /// Default nudge fraction. 1.0 pushes the value out by its full distance to the asymptote.
    pub nudge_by: f64,
    /// Enable statistical adaptation once the warm-up window is over.
    pub adapt: bool,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            rate: defaults::DEFAULT_RATE,
            nudge_by: defaults::DEFAULT_NUDGE_BY,
            adapt: defaults::DEFAULT_ADAPT,
        }
    }
}

impl DecayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rate > 0.0 && self.rate < 1.0) {
            return Err(ConfigError::RateOutOfRange { rate: self.rate });
        }
        if self.nudge_by < 0.0 {
            return Err(ConfigError::NegativeNudge {
                nudge_by: self.nudge_by,
            });
        }
        Ok(())
    }
}
