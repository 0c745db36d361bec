//! Storage trait definitions implemented by the infrastructure layer.

pub mod asset_store;

#[cfg(test)]
pub use asset_store::MockAssetStore;
pub use asset_store::{AssetError, AssetStore};
