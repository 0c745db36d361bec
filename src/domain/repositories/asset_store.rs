//! Storage interface for the page's optional binary assets.

use async_trait::async_trait;

/// Failure to obtain an asset.
///
/// Never fatal for the page: the renderer turns every variant into a visible
/// warning, and the download handlers map it to `404 Not Found`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {key}")]
    NotFound { key: String },

    #[error("Asset {key} could not be read: {reason}")]
    Unreadable { key: String, reason: String },

    #[error("Asset {key} is not a supported image")]
    Undecodable { key: String },
}

impl AssetError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Key of the asset that failed.
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key } | Self::Unreadable { key, .. } | Self::Undecodable { key } => {
                key
            }
        }
    }
}

/// Read-only access to the profile image, resume and similar files.
///
/// Keys are plain relative names such as `profile.jpeg`.
///
/// # Implementations
///
/// - [`crate::infrastructure::assets::FsAssetStore`] - files under a root directory
/// - [`crate::infrastructure::assets::MemoryAssetStore`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Reads the full contents of an asset.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if no asset exists under `key`.
    /// Returns [`AssetError::Unreadable`] on I/O errors.
    async fn load(&self, key: &str) -> Result<Vec<u8>, AssetError>;

    /// Reads at most `len` bytes from the start of an asset.
    ///
    /// # Errors
    ///
    /// Same as [`AssetStore::load`].
    async fn load_prefix(&self, key: &str, len: usize) -> Result<Vec<u8>, AssetError>;

    /// Returns `true` if an asset exists under `key`.
    async fn exists(&self, key: &str) -> bool;
}
