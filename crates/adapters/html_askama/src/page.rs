//! Dashboard page template.

use askama::Template;

use godoksa_app::services::dashboard_service::Dashboard;

use crate::error::RenderError;

/// Full-page template.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    dashboard: &'a Dashboard,
}

/// Render `dashboard` as a complete HTML document.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if template evaluation fails.
pub fn render_page(dashboard: &Dashboard) -> Result<String, RenderError> {
    let html = PageTemplate { dashboard }.render()?;
    tracing::debug!(bytes = html.len(), "rendered dashboard page");
    Ok(html)
}
