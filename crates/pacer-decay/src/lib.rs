//! # pacer-decay
//!
//! Adaptive decaying-parameter controller.
//! A [`DecayController`] delivers values along a hyperbolic curve toward an
//! asymptote, can be nudged away from it on failure, and once warmed up
//! re-tunes its asymptote, nudge target and decay rate from the recorded
//! failure values.
//!
//! ```
//! use pacer_decay::DecayController;
//!
//! let mut decay = DecayController::new(4.0, 0.0, 0.5, 1.0, false).unwrap();
//! assert_eq!(decay.deliver_one(), 4.0);
//! assert!((decay.deliver_one() - 2.0).abs() < 1e-12);
//! ```

pub mod adapter;
pub mod controller;
pub mod curve;
pub mod direction;
pub mod ticker;

pub use adapter::{AdapterPhase, AdjustBranch, AdjustContext, Adjustment, StatisticalAdapter};
pub use controller::{DecayController, NudgeOutcome};
pub use curve::Hyperbola;
pub use direction::Direction;
pub use ticker::Ticker;
