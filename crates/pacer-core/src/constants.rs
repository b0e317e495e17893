/// Pacer version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "PACER_LOG";

/// Target prefix shared by every pacer crate, used to build the fallback log filter.
pub const LOG_TARGET_PREFIX: &str = "pacer";

/// Tolerance used when comparing fitted curve values.
pub const CURVE_TOLERANCE: f64 = 1e-9;
