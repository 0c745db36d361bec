//! Application layer services.
//!
//! Services combine the pure domain model with asset storage and provide a
//! small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::page_service::PageService`] - Page rendering and asset delivery
//!
//! The contact form needs no service: it is a pure function of its fields
//! (see [`crate::domain::contact`]).

pub mod services;
