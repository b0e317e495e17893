// Single source of truth for all default values.

// --- Decay controller ---
pub const DEFAULT_RATE: f64 = 0.5;
pub const DEFAULT_NUDGE_BY: f64 = 1.0;
pub const DEFAULT_ADAPT: bool = true;

// --- Statistical adapter ---
pub const DEFAULT_N_WARM_UP: u32 = 2;
pub const DEFAULT_N_DECAY: u32 = 5;
pub const DEFAULT_STD_ASYMPTOTE: f64 = 1.0;
pub const DEFAULT_STD_NUDGE: f64 = 3.0;
pub const DEFAULT_NUDGE_RATE_ASYMPTOTE: f64 = 1.1;
pub const DEFAULT_RATE_CEILING: f64 = 0.999; // 0.1% drop over one step
pub const DEFAULT_BURST_WEIGHT: f64 = 0.5;
pub const DEFAULT_FALLBACK_STD_ASYMPTOTE: f64 = 2.0;
pub const DEFAULT_FALLBACK_STD_NUDGE: f64 = 1.0;

// --- Retry ---
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_INITIAL_DELAY_SECS: f64 = 1.0;
pub const DEFAULT_MIN_DELAY_SECS: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
