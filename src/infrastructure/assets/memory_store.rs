//! In-memory asset store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::repositories::{AssetError, AssetStore};

/// Holds assets in a map fixed at construction.
///
/// Used by tests and wherever assets are embedded rather than read from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset, replacing any previous value under the same key.
    pub fn with_asset(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(key.into(), bytes.into());
        self
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn load(&self, key: &str) -> Result<Vec<u8>, AssetError> {
        self.assets
            .get(key)
            .cloned()
            .ok_or_else(|| AssetError::not_found(key))
    }

    async fn load_prefix(&self, key: &str, len: usize) -> Result<Vec<u8>, AssetError> {
        self.assets
            .get(key)
            .map(|bytes| bytes[..len.min(bytes.len())].to_vec())
            .ok_or_else(|| AssetError::not_found(key))
    }

    async fn exists(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }
}
