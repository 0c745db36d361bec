//! Skill taxonomy entity.

use serde::{Deserialize, Serialize};

/// A labelled group of skills, rendered as a subsection of badges.
///
/// Labels are unique within a page (checked by
/// [`crate::domain::content::PortfolioContent`] validation). The skill list
/// may be empty and keeps its configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new<I, S>(label: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}
