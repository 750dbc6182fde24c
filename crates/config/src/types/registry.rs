//! Runtime registry of loaded models.
//!
//! Responsibilities:
//! - Define `ModelMetadata`, the structured record kept for a loaded model.
//! - Provide `ModelRegistry`, a keyed map that owns its own synchronization.
//!
//! Does NOT handle:
//! - Loading, downloading, or unloading models.
//! - Persisting the registry across restarts.
//!
//! Invariants:
//! - Registration is insert-or-overwrite: the last write for a key wins.
//! - Entries are never removed; the registry only grows or overwrites.
//! - A poisoned lock is recovered rather than propagated.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Metadata describing a model loaded into the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Local filesystem path or hub repository id the model was loaded from.
    pub path: String,
    /// Hub revision or registry version, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Device the model was placed on (e.g. `cuda:0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Additional loader parameters.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl ModelMetadata {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            revision: None,
            device: None,
            params: BTreeMap::new(),
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }
}

/// Thread-safe map from model key to its metadata.
#[derive(Debug)]
pub struct ModelRegistry {
    name: &'static str,
    entries: RwLock<HashMap<String, ModelMetadata>>,
}

impl ModelRegistry {
    /// Create an empty registry. `name` only appears in log events.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ModelMetadata>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ModelMetadata>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite the entry for `key`, returning the previous value.
    pub fn register(&self, key: impl Into<String>, metadata: ModelMetadata) -> Option<ModelMetadata> {
        let key = key.into();
        let previous = self.write().insert(key.clone(), metadata);
        tracing::debug!(
            registry = self.name,
            key = %key,
            overwritten = previous.is_some(),
            "Registered model"
        );
        previous
    }

    pub fn get(&self, key: &str) -> Option<ModelMetadata> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Point-in-time copy of every entry, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<String, ModelMetadata> {
        self.read()
            .iter()
            .map(|(key, metadata)| (key.clone(), metadata.clone()))
            .collect()
    }
}
