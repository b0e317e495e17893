use std::collections::HashMap;

use pacer_core::errors::PacerResult;

use super::{MachineParams, ParamStore, StoredParams};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryParamStore {
    machines: HashMap<String, MachineParams>,
}

impl MemoryParamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParamStore for MemoryParamStore {
    fn machine(&self, fingerprint: &str) -> PacerResult<Option<MachineParams>> {
        Ok(self.machines.get(fingerprint).cloned())
    }

    fn put(&mut self, fingerprint: &str, name: &str, params: StoredParams) -> PacerResult<()> {
        self.machines
            .entry(fingerprint.to_string())
            .or_default()
            .insert(name.to_string(), params);
        Ok(())
    }

    fn reset(&mut self) -> PacerResult<()> {
        self.machines.clear();
        Ok(())
    }
}
