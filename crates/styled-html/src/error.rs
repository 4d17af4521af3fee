//! Error type for the template layer.

use crate::theme::ThemeError;

/// Error returned by [`Renderer`](crate::Renderer) and
/// [`render_template`](crate::render_template).
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template compilation or rendering failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),
    /// The theme handed to the renderer is invalid.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}
