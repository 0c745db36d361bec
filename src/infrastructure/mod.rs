//! Infrastructure layer implementing domain storage traits.
//!
//! - [`assets`] - Filesystem and in-memory asset stores

pub mod assets;
