//! Stable error codes for callers that match on strings (logs, FFI).

/// Every pacer error enum implements this to expose a structured code.
pub trait PacerErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROTOCOL_ERROR: &str = "PROTOCOL_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
