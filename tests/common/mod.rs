#![allow(dead_code)]

use std::sync::Arc;

use portfolio::application::services::PageService;
use portfolio::domain::content::PortfolioContent;
use portfolio::infrastructure::assets::MemoryAssetStore;
use portfolio::state::AppState;

pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
pub const RESUME_BYTES: &[u8] = b"%PDF-1.7\n% test resume\n";

/// Asset keys from the built-in content.
pub const PROFILE_KEY: &str = "profile.jpeg";
pub const RESUME_KEY: &str = "HariKilambi_Resume.pdf";

pub fn full_store() -> MemoryAssetStore {
    MemoryAssetStore::new()
        .with_asset(PROFILE_KEY, JPEG_BYTES)
        .with_asset(RESUME_KEY, RESUME_BYTES)
}

pub fn empty_store() -> MemoryAssetStore {
    MemoryAssetStore::new()
}

pub fn create_test_state(store: MemoryAssetStore) -> AppState {
    create_test_state_with(PortfolioContent::default(), store)
}

pub fn create_test_state_with(content: PortfolioContent, store: MemoryAssetStore) -> AppState {
    let page_service = Arc::new(PageService::new(Arc::new(content), Arc::new(store)));
    AppState::new(page_service)
}
