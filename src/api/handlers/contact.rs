//! Handler for JSON contact form submissions.

use axum::{Json, http::StatusCode};
use validator::Validate;

use crate::api::dto::contact::{ContactResponse, ContactSubmission};
use crate::domain::contact::submit_contact_form;
use crate::error::AppError;

/// Validates a contact message. Nothing is sent or stored.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// { "name": "Ann", "email": "a@b.com", "message": "Hi" }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: all fields filled, `status` is `acknowledged`
/// - **422 Unprocessable Entity**: a field is blank, `status` is `rejected`
/// - **400 Bad Request**: a field exceeds its length limit
pub async fn contact_api_handler(
    Json(payload): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    payload.validate()?;

    let outcome = submit_contact_form(&payload.name, &payload.email, &payload.message);
    let status = if outcome.is_acknowledged() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    tracing::info!(accepted = outcome.is_acknowledged(), "Contact form submitted");

    Ok((status, Json(ContactResponse(outcome))))
}
