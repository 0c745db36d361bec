//! Profile entity: who the portfolio belongs to.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Identity shown in the page header.
///
/// Constructed once when the content is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    /// One-line professional headline shown under the name.
    pub headline: String,

    pub location: String,

    #[validate(custom(function = "not_blank"))]
    pub email: String,

    /// Asset key of the portrait image.
    #[validate(custom(function = "not_blank"))]
    pub image: String,

    #[validate(nested)]
    pub resume: ResumeRef,
}

/// Reference to the resume document in the asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResumeRef {
    /// Asset key of the stored file.
    #[validate(length(min = 1, message = "Resume file key must not be empty"))]
    pub file: String,

    /// File name offered to the browser when downloading.
    #[validate(length(min = 1, message = "Resume download name must not be empty"))]
    pub download_name: String,
}

impl Profile {
    /// Returns the `mailto:` link for the profile email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Rejects empty and whitespace-only values.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        return Err(err);
    }
    Ok(())
}
