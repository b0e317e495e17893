use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::ConfigError;

/// Statistical adapter tuning.
///
/// These were never settled on final values, so all of them are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Number of recorded fails before statistical adaptation takes over.
    pub n_warm_up: u32,
    /// Adaptation steps over which the decay rate relaxes to `rate_ceiling`.
    pub n_decay: u32,
    /// Width of the asymptote band around the fail mean, in standard deviations.
    pub std_asymptote: f64,
    /// Initial nudge distance above the fail mean, in standard deviations.
    pub std_nudge: f64,
    /// Value the nudge multiplier decays toward.
    pub nudge_rate_asymptote: f64,
    /// Decay rate reached after `n_decay` adaptations.
    pub rate_ceiling: f64,
    /// Extra standard deviations added per consecutive single-step fail.
    pub burst_weight: f64,
    /// Asymptote width used by the degenerate-overlap fallback.
    pub fallback_std_asymptote: f64,
    /// Nudge width used by the degenerate-overlap fallback.
    pub fallback_std_nudge: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            n_warm_up: defaults::DEFAULT_N_WARM_UP,
            n_decay: defaults::DEFAULT_N_DECAY,
            std_asymptote: defaults::DEFAULT_STD_ASYMPTOTE,
            std_nudge: defaults::DEFAULT_STD_NUDGE,
            nudge_rate_asymptote: defaults::DEFAULT_NUDGE_RATE_ASYMPTOTE,
            rate_ceiling: defaults::DEFAULT_RATE_CEILING,
            burst_weight: defaults::DEFAULT_BURST_WEIGHT,
            fallback_std_asymptote: defaults::DEFAULT_FALLBACK_STD_ASYMPTOTE,
            fallback_std_nudge: defaults::DEFAULT_FALLBACK_STD_NUDGE,
        }
    }
}

impl AdapterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_decay == 0 {
            return Err(invalid("adapter.n_decay", "must be > 0"));
        }
        if !(self.rate_ceiling > 0.0 && self.rate_ceiling < 1.0) {
            return Err(invalid("adapter.rate_ceiling", "must be within (0, 1)"));
        }
        if self.std_nudge <= self.nudge_rate_asymptote {
            return Err(invalid(
                "adapter.std_nudge",
                "must be greater than adapter.nudge_rate_asymptote",
            ));
        }
        if self.burst_weight < 0.0 {
            return Err(invalid("adapter.burst_weight", "must be >= 0"));
        }
        // The nudge multiplier decays toward nudge_rate_asymptote; the planned
        // nudge stays outside the asymptote band only while it exceeds std_asymptote.
        if self.std_asymptote < 0.0 {
            return Err(invalid("adapter.std_asymptote", "must be >= 0"));
        }
        if self.std_asymptote >= self.nudge_rate_asymptote {
            return Err(invalid(
                "adapter.std_asymptote",
                "must be less than adapter.nudge_rate_asymptote",
            ));
        }
        if self.fallback_std_asymptote < 0.0 {
            return Err(invalid("adapter.fallback_std_asymptote", "must be >= 0"));
        }
        if self.fallback_std_nudge < 0.0 {
            return Err(invalid("adapter.fallback_std_nudge", "must be >= 0"));
        }
        if self.fallback_std_asymptote + self.fallback_std_nudge <= 0.0 {
            return Err(invalid(
                "adapter.fallback_std_nudge",
                "fallback widths must not both be zero",
            ));
        }
        Ok(())
    }
}
