//! DTOs for the contact form endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::contact::ContactOutcome;

/// Contact form fields, from either a JSON body or an HTML form post.
///
/// Missing fields deserialize as empty strings so that presence is judged by
/// the form rules rather than rejected by the extractor. The length limits
/// guard the transport only.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name is too long"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: String,
}

/// Result of a contact submission.
///
/// ```json
/// { "status": "acknowledged", "message": "Message received! ..." }
/// ```
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ContactResponse(pub ContactOutcome);
