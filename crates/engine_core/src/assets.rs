//! Catalog of already-loaded visual assets.
//!
//! The simulation never parses model formats; a loading layer (outside this
//! workspace) registers each asset's bounding box here and the simulation
//! queries bounds by handle. Assets that failed to load stay registered so
//! spawn code can skip them gracefully instead of erroring.

use std::collections::HashMap;

use thiserror::Error;

use crate::components::Aabb;

/// Opaque handle to a registered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(usize);

/// Lookup failures for asset bounds.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown asset '{0}'")]
    Unknown(String),
    #[error("asset '{0}' failed to load")]
    LoadFailed(String),
}

struct AssetEntry {
    name: String,
    /// `None` when the loading layer reported a failure for this asset.
    bounds: Option<Aabb>,
}

/// Handle-based registry of loaded asset bounds.
#[derive(Default)]
pub struct AssetCatalog {
    entries: Vec<AssetEntry>,
    by_name: HashMap<String, AssetHandle>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successfully loaded asset. Re-registering a name replaces
    /// its bounds but keeps the handle stable.
    pub fn register(&mut self, name: &str, bounds: Aabb) -> AssetHandle {
        self.insert(name, Some(bounds))
    }

    /// Record that an asset failed to load. Queries for it will return
    /// [`AssetError::LoadFailed`] so callers can skip it.
    pub fn register_failed(&mut self, name: &str) -> AssetHandle {
        self.insert(name, None)
    }

    fn insert(&mut self, name: &str, bounds: Option<Aabb>) -> AssetHandle {
        if let Some(&handle) = self.by_name.get(name) {
            self.entries[handle.0].bounds = bounds;
            return handle;
        }
        let handle = AssetHandle(self.entries.len());
        self.entries.push(AssetEntry {
            name: name.to_string(),
            bounds,
        });
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    /// Look up an asset's bounding box by name.
    pub fn bounds(&self, name: &str) -> Result<Aabb, AssetError> {
        let handle = self
            .by_name
            .get(name)
            .ok_or_else(|| AssetError::Unknown(name.to_string()))?;
        self.bounds_of(*handle)
    }

    /// Look up an asset's bounding box by handle.
    pub fn bounds_of(&self, handle: AssetHandle) -> Result<Aabb, AssetError> {
        let entry = &self.entries[handle.0];
        entry
            .bounds
            .ok_or_else(|| AssetError::LoadFailed(entry.name.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
