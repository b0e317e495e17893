//! Configuration errors.

use super::error_code::{self, PacerErrorCode};

/// Errors raised when a controller or config is built with illegal values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("start value can not be equal to asymptote: {value}")]
    StartEqualsAsymptote { value: f64 },

    #[error("rate must express a fractional one-step approach toward the asymptote (0 < rate < 1), got {rate}")]
    RateOutOfRange { rate: f64 },

    #[error("nudge_by must be >= 0, got {nudge_by}")]
    NegativeNudge { nudge_by: f64 },

    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl PacerErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
