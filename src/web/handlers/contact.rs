//! Contact form post handler.

use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::api::dto::contact::ContactSubmission;
use crate::domain::contact::ContactFormState;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::page::PageTemplate;

/// Handles the HTML contact form and re-renders the page with the result.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// The submitted values are echoed back into the form. Nothing is sent or
/// stored; the form state lives only for this request.
///
/// # Response Codes
///
/// - **200 OK**: page with the acknowledgment banner
/// - **422 Unprocessable Entity**: page with the "fill all fields" banner
/// - **400 Bad Request**: a field exceeds its length limit
pub async fn contact_handler(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Result<impl IntoResponse, AppError> {
    submission.validate()?;

    let mut form =
        ContactFormState::with_fields(submission.name, submission.email, submission.message);
    let accepted = form.submit().is_acknowledged();
    tracing::info!(accepted, "Contact form submitted");

    let status = if accepted {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let page = state.page_service.render().await.with_contact_form(&form);
    Ok((status, PageTemplate { page }))
}
