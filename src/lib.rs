//! # Portfolio
//!
//! A single-page personal portfolio served with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content, the pure page renderer, the contact form
//! - **Application Layer** ([`application`]) - Page rendering with asset probing
//! - **Infrastructure Layer** ([`infrastructure`]) - Filesystem and in-memory asset stores
//! - **API Layer** ([`api`]) - JSON endpoints, asset downloads, middleware
//! - **Web Layer** ([`web`]) - The HTML page and contact form
//!
//! ## Behaviour
//!
//! - The page is rebuilt on every request from static content
//! - A missing profile image or resume shows a warning instead of failing
//! - The contact form only checks that all fields are filled; nothing is sent
//!
//! ## Quick Start
//!
//! ```bash
//! mkdir -p assets
//! cp ~/me.jpeg assets/profile.jpeg
//! cp ~/resume.pdf assets/HariKilambi_Resume.pdf
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PageService;
    pub use crate::domain::contact::{ContactFormState, ContactOutcome, submit_contact_form};
    pub use crate::domain::content::PortfolioContent;
    pub use crate::domain::page::{PageDescription, render};
    pub use crate::error::AppError;
    pub use crate::infrastructure::assets::{FsAssetStore, MemoryAssetStore};
    pub use crate::state::AppState;
}
