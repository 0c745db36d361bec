//! Portfolio page template and handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::page::PageDescription;
use crate::state::AppState;

/// Template for the portfolio page.
///
/// Renders `templates/page.html` from a [`PageDescription`]. All text is
/// HTML-escaped, including contact form values echoed back to the user.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: PageDescription,
}

/// Renders the portfolio page.
///
/// # Endpoint
///
/// `GET /`
pub async fn page_handler(State(state): State<AppState>) -> impl IntoResponse {
    PageTemplate {
        page: state.page_service.render().await,
    }
}
