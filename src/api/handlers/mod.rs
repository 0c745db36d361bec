//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod assets;
pub mod contact;
pub mod health;
pub mod page;

pub use assets::{profile_image_handler, resume_handler};
pub use contact::contact_api_handler;
pub use health::health_handler;
pub use page::page_handler;
