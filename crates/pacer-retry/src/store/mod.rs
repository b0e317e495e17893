//! Per-machine persistence of tuned controller parameters.

pub mod configured;
pub mod json;
pub mod memory;

pub use configured::ConfiguredStore;
pub use json::JsonParamStore;
pub use memory::MemoryParamStore;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pacer_core::errors::{PacerResult, StoreError};
use serde::{Deserialize, Serialize};

/// Curve parameters kept after a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredParams {
    pub last_nudge: f64,
    pub asymptote: f64,
    pub updated_at: DateTime<Utc>,
}

impl StoredParams {
    pub fn new(last_nudge: f64, asymptote: f64) -> Self {
        Self {
            last_nudge,
            asymptote,
            updated_at: Utc::now(),
        }
    }

    /// Whether a controller can be built from these values.
    pub fn is_usable(&self) -> bool {
        self.last_nudge.is_finite() && self.asymptote.is_finite() && self.last_nudge != self.asymptote
    }
}

/// Parameters of one machine, keyed by operation name.
pub type MachineParams = BTreeMap<String, StoredParams>;

pub trait ParamStore {
    /// Every parameter stored for `fingerprint`, or `None` for an unknown machine.
    fn machine(&self, fingerprint: &str) -> PacerResult<Option<MachineParams>>;

    fn put(&mut self, fingerprint: &str, name: &str, params: StoredParams) -> PacerResult<()>;

    /// Drop everything.
    fn reset(&mut self) -> PacerResult<()>;

    fn get(&self, fingerprint: &str, name: &str) -> PacerResult<Option<StoredParams>> {
        Ok(self
            .machine(fingerprint)?
            .and_then(|mut params| params.remove(name)))
    }

    /// Like [`Self::get`], but a missing machine or name is an error.
    fn require(&self, fingerprint: &str, name: &str) -> PacerResult<StoredParams> {
        let mut params = self
            .machine(fingerprint)?
            .ok_or_else(|| StoreError::MachineNotFound {
                fingerprint: fingerprint.to_string(),
            })?;
        params.remove(name).ok_or_else(|| {
            StoreError::ParamNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}
