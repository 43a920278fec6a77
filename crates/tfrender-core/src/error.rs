//! Core error types and their mapping onto service errors.

use tfrender_model::error::TfRenderError;

use crate::validation::ValidationError;

/// Template loading or rendering failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template did not parse.
    #[error("failed to load template {name}: {source}")]
    TemplateLoad {
        /// Template name.
        name: &'static str,
        /// Parser error.
        #[source]
        source: minijinja::Error,
    },

    /// Substitution failed, e.g. on an undefined placeholder.
    #[error("failed to render template {name}: {source}")]
    Substitution {
        /// Template name.
        name: &'static str,
        /// Engine error.
        #[source]
        source: minijinja::Error,
    },
}

/// Convert a validation error into a client-facing service error.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn validation_error_to_tfrender(e: ValidationError) -> TfRenderError {
    TfRenderError::validation(e.to_string())
}

/// Convert a render error into a server error that hides the cause.
#[must_use]
pub fn render_error_to_tfrender(e: RenderError) -> TfRenderError {
    TfRenderError::render_failed(e)
}
