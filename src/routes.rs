//! Top-level router configuration combining page, asset and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Portfolio page (HTML)
//! - `POST /contact`        - Contact form post (HTML, rate limited)
//! - `GET  /resume`         - Resume download
//! - `GET  /profile-image`  - Profile image
//! - `GET  /health`         - Asset health check
//! - `/api/*`               - JSON page model and contact endpoint
//! - `/static/*`            - Stylesheet and other static files
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the contact endpoints
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::{health_handler, profile_image_handler, resume_handler};
use crate::api::middleware::tracing;
use crate::domain::page::{PROFILE_IMAGE_PATH, RESUME_PATH};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(api::routes::contact_routes());

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(web::routes::contact_routes())
        .route(RESUME_PATH, get(resume_handler))
        .route(PROFILE_IMAGE_PATH, get(profile_image_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
