//! Parameter store errors.

use super::error_code::{self, PacerErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("store serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("parameter {name} not in store")]
    ParamNotFound { name: String },

    #[error("machine {fingerprint} has no parameters stored yet")]
    MachineNotFound { fingerprint: String },
}

impl PacerErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
