//! Filesystem-backed asset store.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::domain::repositories::{AssetError, AssetStore};

/// Serves assets from files under a root directory.
///
/// Files are read on every call, so replacing an asset on disk takes effect
/// without a restart. Keys that would escape the root (absolute paths, `..`)
/// are reported as not found.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key to a path inside the root, or `None` if it would escape it.
    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        is_plain.then(|| self.root.join(relative))
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn load(&self, key: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(key).ok_or_else(|| AssetError::not_found(key))?;
        debug!(path = %path.display(), "Reading asset");

        tokio::fs::read(&path).await.map_err(|e| read_error(key, e))
    }

    async fn load_prefix(&self, key: &str, len: usize) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(key).ok_or_else(|| AssetError::not_found(key))?;
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| read_error(key, e))?;

        let mut bytes = Vec::with_capacity(len);
        file.take(len as u64)
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| read_error(key, e))?;
        Ok(bytes)
    }

    async fn exists(&self, key: &str) -> bool {
        let Some(path) = self.resolve(key) else {
            return false;
        };

        tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}

fn read_error(key: &str, e: std::io::Error) -> AssetError {
    match e.kind() {
        ErrorKind::NotFound => AssetError::not_found(key),
        _ => AssetError::Unreadable {
            key: key.to_string(),
            reason: e.to_string(),
        },
    }
}
