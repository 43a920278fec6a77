//! Handler implementation bridging HTTP to the render provider.

use bytes::Bytes;

use tfrender_http::dispatch::{HandlerFuture, TfRenderHandler};
use tfrender_http::response::{health_response, text_response};
use tfrender_model::operations::TfRenderOperation;

use crate::provider::TfRenderProvider;

/// Handler that bridges the HTTP layer to the [`TfRenderProvider`].
#[derive(Debug, Clone)]
pub struct TfRenderCoreHandler {
    provider: TfRenderProvider,
}

impl TfRenderCoreHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: TfRenderProvider) -> Self {
        Self { provider }
    }
}

impl TfRenderHandler for TfRenderCoreHandler {
    fn handle_operation(&self, op: TfRenderOperation, body: Bytes) -> HandlerFuture {
        let provider = self.provider.clone();
        Box::pin(async move {
            match op {
                TfRenderOperation::Render => provider.handle_render(&body).map(text_response),
                // Unreachable through `TfRenderHttpService`, which answers
                // health checks before dispatch.
                TfRenderOperation::HealthCheck => Ok(health_response()),
            }
        })
    }
}
