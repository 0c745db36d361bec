//! Handler exposing the declarative page structure.

use axum::{Json, extract::State};

use crate::domain::page::PageDescription;
use crate::state::AppState;

/// Returns the rendered page as JSON.
///
/// # Endpoint
///
/// `GET /api/page`
///
/// Same structure the HTML page is built from, including any asset warnings.
/// The contact form section is always in its `empty` state.
pub async fn page_handler(State(state): State<AppState>) -> Json<PageDescription> {
    Json(state.page_service.render().await)
}
