use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use pacer_core::config::RetryConfig;
use pacer_core::errors::{PacerResult, StoreError};
use tracing::debug;

use super::{MachineParams, ParamStore, StoredParams};

type Db = BTreeMap<String, MachineParams>;

/// Single JSON file shaped `{fingerprint: {name: params}}`.
///
/// A missing or empty file reads as an empty store. The file is written
/// whole on every `put`.
#[derive(Debug, Clone)]
pub struct JsonParamStore {
    path: PathBuf,
}

impl JsonParamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `retry.store_path`, if one is configured.
    pub fn from_config(config: &RetryConfig) -> Option<Self> {
        config.store_path.as_ref().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_db(&self) -> PacerResult<Db> {
        if !self.path.is_file() {
            return Ok(Db::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if raw.trim().is_empty() {
            return Ok(Db::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::Serialization {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save_db(&self, db: &Db) -> PacerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(db).map_err(|e| StoreError::Serialization {
            reason: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), machines = db.len(), "param store saved");
        Ok(())
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl ParamStore for JsonParamStore {
    fn machine(&self, fingerprint: &str) -> PacerResult<Option<MachineParams>> {
        Ok(self.read_db()?.remove(fingerprint))
    }

    fn put(&mut self, fingerprint: &str, name: &str, params: StoredParams) -> PacerResult<()> {
        let mut db = self.read_db()?;
        db.entry(fingerprint.to_string())
            .or_default()
            .insert(name.to_string(), params);
        self.save_db(&db)
    }

    fn reset(&mut self) -> PacerResult<()> {
        self.save_db(&Db::new())
    }
}
