//! Outbound profile link entity.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// A static hyperlink to an external profile (LinkedIn, GitHub, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactLink {
    pub label: String,
    #[validate(custom(function = "validate_href"))]
    pub href: String,
}

impl ContactLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Accepts only absolute `http`/`https` URLs.
fn validate_href(href: &str) -> Result<(), ValidationError> {
    let url = Url::parse(href).map_err(|_| {
        let mut err = ValidationError::new("invalid_url");
        err.message = Some("Link must be an absolute URL".into());
        err
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => {
            let mut err = ValidationError::new("unsupported_scheme");
            err.message = Some("Only HTTP and HTTPS links are allowed".into());
            Err(err)
        }
    }
}
