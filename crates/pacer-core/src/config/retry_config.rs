use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::ConfigError;

/// Retry/back-off configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay delivered before the first attempt when nothing is stored (seconds).
    pub initial_delay_secs: f64,
    /// Delay the back-off decays toward (seconds).
    pub min_delay_secs: f64,
    /// Standard deviation (seconds) of gaussian variability added to each delay.
    pub jitter_sd_secs: Option<f64>,
    /// JSON file for tuned parameters, used by `Retrier::from_config`.
    /// `None` keeps them in memory for the life of the retrier.
    pub store_path: Option<String>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            initial_delay_secs: defaults::DEFAULT_INITIAL_DELAY_SECS,
            min_delay_secs: defaults::DEFAULT_MIN_DELAY_SECS,
            jitter_sd_secs: None,
            store_path: None,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(invalid("retry.max_attempts", "must be > 0"));
        }
        if self.initial_delay_secs < 0.0 || self.min_delay_secs < 0.0 {
            return Err(invalid("retry.initial_delay_secs", "delays must be >= 0"));
        }
        if self.initial_delay_secs == self.min_delay_secs {
            return Err(invalid(
                "retry.initial_delay_secs",
                "must differ from retry.min_delay_secs",
            ));
        }
        if let Some(sd) = self.jitter_sd_secs {
            if !(sd.is_finite() && sd >= 0.0) {
                return Err(invalid("retry.jitter_sd_secs", "must be finite and >= 0"));
            }
        }
        Ok(())
    }
}
