//! Rendering errors.

/// Failure while turning a dashboard into HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template evaluation failed.
    #[error("failed to render template")]
    Template(#[from] askama::Error),
}
