//! Handlers serving the profile image and the resume download.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Serves the resume as an attachment.
///
/// # Endpoint
///
/// `GET /resume`
///
/// The file is read on each request. The response carries the configured
/// download name in `Content-Disposition` and a SHA-256 `ETag`; a matching
/// `If-None-Match` gets **304 Not Modified**.
///
/// # Errors
///
/// Returns **404 Not Found** if the resume is missing.
pub async fn resume_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let download = state.page_service.resume_download().await.map_err(|e| {
        warn!(error = %e, "Resume download requested but unavailable");
        AppError::from(e)
    })?;

    let etag = download.etag();
    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|tag| tag.trim() == etag));

    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, download.content_type().to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
            (header::ETAG, etag),
        ],
        download.bytes,
    )
        .into_response())
}

/// Serves the profile image.
///
/// # Endpoint
///
/// `GET /profile-image`
///
/// # Errors
///
/// Returns **404 Not Found** if the image is missing or not a supported format.
pub async fn profile_image_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let image = state.page_service.profile_image().await?;

    Ok((
        [(header::CONTENT_TYPE, image.format.content_type())],
        image.bytes,
    )
        .into_response())
}
