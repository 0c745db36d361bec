//! Shared application state injected into handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::PageService;

/// Read-only state shared by all requests.
///
/// Holds no per-session data: every request builds its own contact form state.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(page_service: Arc<PageService>) -> Self {
        Self {
            page_service,
            started_at: Utc::now(),
        }
    }
}
