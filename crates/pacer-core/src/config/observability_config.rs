use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::constants::LOG_TARGET_PREFIX;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Filter applied when `PACER_LOG` is unset or invalid, e.g. `pacer=info`.
    pub fn fallback_filter(&self) -> String {
        format!("{LOG_TARGET_PREFIX}={}", self.log_level)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }
        Ok(())
    }
}
