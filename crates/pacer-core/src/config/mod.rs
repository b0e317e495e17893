pub mod adapter_config;
pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod retry_config;

pub use adapter_config::AdapterConfig;
pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use retry_config::RetryConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PacerResult};

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PacerConfig {
    pub decay: DecayConfig,
    pub adapter: AdapterConfig,
    pub retry: RetryConfig,
    pub observability: ObservabilityConfig,
}

impl PacerConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    /// The parsed config is validated before it is returned.
    pub fn from_toml(input: &str) -> PacerResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> PacerResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::ParseError {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Reject values the controller or retrier would refuse at run time.
    pub fn validate(&self) -> PacerResult<()> {
        self.decay.validate()?;
        self.adapter.validate()?;
        self.retry.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

pub(crate) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
