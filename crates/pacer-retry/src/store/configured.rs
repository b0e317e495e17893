use pacer_core::config::RetryConfig;
use pacer_core::errors::PacerResult;

use super::{JsonParamStore, MachineParams, MemoryParamStore, ParamStore, StoredParams};

/// Store picked by `retry.store_path`: a JSON file when set, memory otherwise.
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    Memory(MemoryParamStore),
    Json(JsonParamStore),
}

impl ConfiguredStore {
    pub fn from_config(config: &RetryConfig) -> Self {
        match JsonParamStore::from_config(config) {
            Some(json) => Self::Json(json),
            None => Self::Memory(MemoryParamStore::new()),
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl ParamStore for ConfiguredStore {
    fn machine(&self, fingerprint: &str) -> PacerResult<Option<MachineParams>> {
        match self {
            Self::Memory(store) => store.machine(fingerprint),
            Self::Json(store) => store.machine(fingerprint),
        }
    }

    fn put(&mut self, fingerprint: &str, name: &str, params: StoredParams) -> PacerResult<()> {
        match self {
            Self::Memory(store) => store.put(fingerprint, name, params),
            Self::Json(store) => store.put(fingerprint, name, params),
        }
    }

    fn reset(&mut self) -> PacerResult<()> {
        match self {
            Self::Memory(store) => store.reset(),
            Self::Json(store) => store.reset(),
        }
    }
}
