//! HTML template rendering handlers.

mod contact;
mod page;

pub use contact::contact_handler;
pub use page::{PageTemplate, page_handler};
