//! # pacer-retry
//!
//! Retries a fallible operation with delays delivered by a
//! [`pacer_decay::DecayController`]. Each failure nudges the controller;
//! each success stores the tuned curve parameters under the operation name
//! and this machine's fingerprint, so the next process starts from them.

pub mod delay;
pub mod fingerprint;
pub mod retrier;
pub mod store;

pub use delay::{Delay, RecordingSleeper, Sleeper, ThreadSleeper};
pub use fingerprint::{MachineFingerprint, MachineInfo};
pub use retrier::{RetryError, Retrier};
pub use store::{ConfiguredStore, JsonParamStore, MemoryParamStore, ParamStore, StoredParams};
