//! Web page route configuration.

use crate::api::middleware::rate_limit;
use crate::domain::page::CONTACT_PATH;
use crate::state::AppState;
use crate::web::handlers::{contact_handler, page_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET /` - The portfolio page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(page_handler))
}

/// HTML contact form, rate limited per client IP.
///
/// # Endpoints
///
/// - `POST /contact` - Submit the form and re-render the page
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(CONTACT_PATH, post(contact_handler))
        .layer(rate_limit::contact_layer())
}
