//! Work experience entity.

use serde::{Deserialize, Serialize};

/// One position held, with its achievements as bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    /// Free-form date range, e.g. `Mar 2025 to Jun 2025`.
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}
