//! API route configuration.

use crate::api::handlers::{contact_api_handler, page_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET /page` - Declarative page structure as JSON
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/page", get(page_handler))
}

/// Contact form API, rate limited per client IP.
///
/// # Endpoints
///
/// - `POST /contact` - Validate a contact message (nothing is sent)
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact_api_handler))
        .layer(rate_limit::contact_layer())
}
