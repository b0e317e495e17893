//! Error taxonomy for the pacer workspace.
//!
//! Configuration errors are raised eagerly at construction or assignment,
//! protocol errors at call time. Numeric domain faults are not represented
//! here: they surface as NaN/Inf from the curve arithmetic.

pub mod config_error;
pub mod error_code;
pub mod protocol_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::PacerErrorCode;
pub use protocol_error::ProtocolError;
pub use store_error::StoreError;

/// Top-level error for every fallible pacer operation.
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl PacerErrorCode for PacerError {
    fn error_code(&self) -> &'static str {
        match self {
            PacerError::Config(e) => e.error_code(),
            PacerError::Protocol(e) => e.error_code(),
            PacerError::Store(e) => e.error_code(),
        }
    }
}

pub type PacerResult<T> = Result<T, PacerError>;
