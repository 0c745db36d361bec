//! Business logic services for the application layer.

pub mod page_service;

pub use page_service::{
    PageService, load_profile_image, offer_resume_download, probe_profile_image,
};
