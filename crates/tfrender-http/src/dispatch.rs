//! tfrender handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use tfrender_model::error::TfRenderError;
use tfrender_model::operations::TfRenderOperation;

use crate::body::TfRenderResponseBody;

/// Boxed future returned by [`TfRenderHandler::handle_operation`].
pub type HandlerFuture = Pin<
    Box<dyn Future<Output = Result<http::Response<TfRenderResponseBody>, TfRenderError>> + Send>,
>;

/// Trait that the business logic provider must implement.
///
/// The handler receives the routed operation and the raw body bytes and
/// returns a complete HTTP response. This is the boundary between the HTTP
/// transport layer and the validate/map/render pipeline.
pub trait TfRenderHandler: Send + Sync + 'static {
    /// Handle an operation and produce an HTTP response.
    fn handle_operation(&self, op: TfRenderOperation, body: Bytes) -> HandlerFuture;
}

/// Dispatch an operation to the handler.
pub async fn dispatch_operation<H: TfRenderHandler>(
    handler: &H,
    op: TfRenderOperation,
    body: Bytes,
) -> Result<http::Response<TfRenderResponseBody>, TfRenderError> {
    tracing::debug!(operation = %op, body_len = body.len(), "dispatching operation");
    handler.handle_operation(op, body).await
}
