//! Portfolio content entities.
//!
//! Everything here is read-only configuration data, loaded once at startup.

pub mod contact_link;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use contact_link::ContactLink;
pub use experience::ExperienceEntry;
pub use profile::{Profile, ResumeRef};
pub use project::Project;
pub use skill::SkillCategory;
