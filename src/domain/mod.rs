//! Domain layer: page content, the declarative page model and the contact form.
//!
//! # Architecture
//!
//! - [`entities`] - Read-only content records (profile, skills, projects, ...)
//! - [`content`] - The complete [`content::PortfolioContent`] and its default
//! - [`page`] - Pure renderer producing a [`page::PageDescription`]
//! - [`contact`] - Contact form validation and state machine
//! - [`asset`] - Loaded image and download values
//! - [`repositories`] - Asset storage trait
//!
//! Nothing in this layer performs I/O except loading a content file. Asset
//! access goes through [`repositories::AssetStore`], implemented in
//! [`crate::infrastructure`].

pub mod asset;
pub mod contact;
pub mod content;
pub mod entities;
pub mod page;
pub mod repositories;
