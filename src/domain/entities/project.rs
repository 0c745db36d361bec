//! Featured project entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A project card: title, description and technology tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Project {
    #[validate(length(min = 1, message = "Project title must not be empty"))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl Project {
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            tech: tech.into_iter().map(Into::into).collect(),
        }
    }
}
