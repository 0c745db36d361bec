//! Request and response types for the JSON API.

pub mod contact;
pub mod health;
