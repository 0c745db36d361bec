//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with asset checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// Always **200 OK**: a missing asset degrades the page but does not make the
/// service unavailable. `status` is `healthy` when both assets are present and
/// `degraded` otherwise.
///
/// # Response
///
/// ```json
/// {
///   "status": "degraded",
///   "version": "0.1.0",
///   "uptime_seconds": 3600,
///   "checks": {
///     "profile_image": { "status": "ok", "message": "image/jpeg" },
///     "resume": { "status": "missing", "message": "Asset not found: resume.pdf" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let profile_image = match state.page_service.profile_image_format().await {
        Ok(format) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format.content_type().to_string()),
        },
        Err(e) => CheckStatus {
            status: "missing".to_string(),
            message: Some(e.to_string()),
        },
    };

    let resume = match state.page_service.resume_available().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "missing".to_string(),
            message: Some(e.to_string()),
        },
    };

    let all_present = profile_image.status == "ok" && resume.status == "ok";

    Json(HealthResponse {
        status: if all_present { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        checks: HealthChecks {
            profile_image,
            resume,
        },
    })
}
