//! The render pipeline.
//!
//! ```text
//! Received --decode--> Decoded --validate--> Validated --map--> Mapped --render--> Rendered
//!    |                    |                                        |
//!    v                    v                                        v
//! DecodeFailed (400)   ValidationFailed (400)                RenderFailed (500)
//! ```
//!
//! Every failure is terminal for the request; nothing is retried.

use std::sync::Arc;

use tracing::{debug, info};

use tfrender_model::error::TfRenderError;
use tfrender_model::request::RenderRequest;

use crate::error::{render_error_to_tfrender, validation_error_to_tfrender};
use crate::renderer::BucketRenderer;
use crate::spec::to_bucket_spec;
use crate::validation::validate;

/// Stateless render provider. Cloning shares the parsed template.
#[derive(Debug, Clone)]
pub struct TfRenderProvider {
    renderer: Arc<BucketRenderer>,
}

impl TfRenderProvider {
    /// Create a provider around an already parsed renderer.
    #[must_use]
    pub fn new(renderer: Arc<BucketRenderer>) -> Self {
        Self { renderer }
    }

    /// Run a raw request body through decode, validate, map and render.
    ///
    /// # Errors
    ///
    /// - `InvalidRequestBody` when the body does not decode
    /// - `ValidationFailed` with the validator's reason
    /// - `RenderFailed` when substitution fails; the cause stays in `source`
    pub fn handle_render(&self, body: &[u8]) -> Result<String, TfRenderError> {
        let request = RenderRequest::from_json(body).map_err(TfRenderError::invalid_request_body)?;
        debug!("request decoded");

        let validated = validate(&request).map_err(validation_error_to_tfrender)?;
        let spec = to_bucket_spec(validated);

        let document = self
            .renderer
            .render(&spec)
            .map_err(render_error_to_tfrender)?;

        info!(
            bucket = spec.bucket_name(),
            region = spec.region(),
            acl = %spec.acl(),
            "terraform rendered successfully",
        );

        Ok(document)
    }
}
