//! HTTP server initialization and runtime setup.
//!
//! Handles content loading, asset store setup and the Axum server lifecycle.

use crate::application::services::PageService;
use crate::config::Config;
use crate::infrastructure::assets::FsAssetStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Page content (built-in or `CONTENT_FILE`)
/// - Filesystem asset store rooted at `ASSETS_DIR`
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// Missing assets are reported at startup but do not stop the server.
///
/// # Errors
///
/// Returns an error if:
/// - The content file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let content = Arc::new(config.load_content()?);
    tracing::info!(name = %content.profile.name, "Content loaded");

    let store = Arc::new(FsAssetStore::new(&config.assets_dir));
    let page_service = Arc::new(PageService::new(content, store));

    report_assets(&page_service).await;

    let state = AppState::new(page_service);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Logs whether each optional asset is present.
async fn report_assets(page_service: &PageService) {
    match page_service.profile_image_format().await {
        Ok(format) => tracing::info!(
            key = %page_service.content().profile.image,
            content_type = format.content_type(),
            "Profile image found"
        ),
        Err(e) => tracing::warn!(error = %e, "Profile image unavailable; page will show a warning"),
    }

    match page_service.resume_available().await {
        Ok(()) => tracing::info!("Resume found"),
        Err(e) => tracing::warn!(error = %e, "Resume unavailable; page will show a warning"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
