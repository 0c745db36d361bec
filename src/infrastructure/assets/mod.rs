//! Asset storage backends.
//!
//! Provides two [`AssetStore`](crate::domain::repositories::AssetStore) implementations:
//! - [`FsAssetStore`] - Files under `ASSETS_DIR`
//! - [`MemoryAssetStore`] - In-memory map for tests and embedding

mod fs_store;
mod memory_store;

pub use fs_store::FsAssetStore;
pub use memory_store::MemoryAssetStore;
