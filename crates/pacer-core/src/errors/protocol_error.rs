//! Call-order violations.

use super::error_code::{self, PacerErrorCode};

/// Errors raised when a caller breaks the controller's call protocol.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("already nudged at step {step}: deliver before nudging again, or nudge by a larger value")]
    AlreadyNudged { step: u64 },

    #[error("adaptation called before warm-up completed ({remaining} fails remaining)")]
    AdaptBeforeWarmUp { remaining: u32 },
}

impl PacerErrorCode for ProtocolError {
    fn error_code(&self) -> &'static str {
        error_code::PROTOCOL_ERROR
    }
}
