//! tfrender HTTP service implementing the hyper `Service` trait.

use std::any::Any;
use std::convert::Infallible;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use futures::FutureExt;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Incoming;
use tracing::{Instrument, error, warn};

use tfrender_model::error::{INVALID_REQUEST_BODY, TfRenderError, TfRenderErrorCode};
use tfrender_model::operations::TfRenderOperation;

use crate::body::TfRenderResponseBody;
use crate::dispatch::{TfRenderHandler, dispatch_operation};
use crate::response::{error_to_response, health_response};
use crate::router::resolve_operation;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Configuration for the tfrender HTTP service.
#[derive(Debug, Clone)]
pub struct TfRenderHttpConfig {
    /// Maximum accepted request body, in bytes.
    pub max_body_size: usize,
}

impl Default for TfRenderHttpConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

/// Hyper `Service` implementation for tfrender.
///
/// Wraps a [`TfRenderHandler`] and drives every request through routing, body
/// collection and dispatch. A panic anywhere in that pipeline is caught here
/// and turned into a `500` so the connection task, and the process, survive.
#[derive(Debug)]
pub struct TfRenderHttpService<H: TfRenderHandler> {
    handler: Arc<H>,
    config: Arc<TfRenderHttpConfig>,
}

impl<H: TfRenderHandler> TfRenderHttpService<H> {
    /// Create a new `TfRenderHttpService`.
    pub fn new(handler: Arc<H>, config: TfRenderHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }

    /// Handle one request with any body type.
    ///
    /// The hyper [`Service`](hyper::service::Service) impl forwards here; tests
    /// call it directly with in-memory bodies.
    pub async fn handle<B>(&self, req: http::Request<B>) -> http::Response<TfRenderResponseBody>
    where
        B: http_body::Body<Data = Bytes> + Send,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
        );

        let pipeline = process_request(req, self.handler.as_ref(), &self.config, &request_id);
        let response = match AssertUnwindSafe(pipeline)
            .catch_unwind()
            .instrument(span.clone())
            .await
        {
            Ok(response) => response,
            Err(panic) => {
                span.in_scope(|| {
                    error!(panic = panic_message(panic.as_ref()), "request handler panicked");
                });
                error_to_response(&TfRenderError::internal_error(), &request_id)
            }
        };

        add_common_headers(response, &request_id)
    }
}

impl<H: TfRenderHandler> Clone for TfRenderHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: TfRenderHandler> hyper::service::Service<http::Request<Incoming>>
    for TfRenderHttpService<H>
{
    type Response = http::Response<TfRenderResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let svc = self.clone();
        Box::pin(async move { Ok(svc.handle(req).await) })
    }
}

/// Process a single request through route -> collect -> dispatch.
async fn process_request<B, H>(
    req: http::Request<B>,
    handler: &H,
    config: &TfRenderHttpConfig,
    request_id: &str,
) -> http::Response<TfRenderResponseBody>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    H: TfRenderHandler,
{
    let (parts, body) = req.into_parts();

    // 1. Route.
    let op = match resolve_operation(&parts.method, parts.uri.path()) {
        Ok(op) => op,
        Err(err) => return respond_error(&err, request_id),
    };

    // 2. Liveness never touches the render path.
    if op == TfRenderOperation::HealthCheck {
        return health_response();
    }

    // 3. Collect body.
    let body = match collect_body(body, config.max_body_size).await {
        Ok(body) => body,
        Err(err) => return respond_error(&err, request_id),
    };

    // 4. Dispatch to handler.
    match dispatch_operation(handler, op, body).await {
        Ok(response) => response,
        Err(err) => respond_error(&err, request_id),
    }
}

/// Collect the body into a single `Bytes` buffer, enforcing `limit`.
async fn collect_body<B>(body: B, limit: usize) -> Result<Bytes, TfRenderError>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Limited::new(body, limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| {
            if e.is::<LengthLimitError>() {
                TfRenderError::payload_too_large()
            } else {
                TfRenderError::with_message(
                    TfRenderErrorCode::InvalidRequestBody,
                    INVALID_REQUEST_BODY,
                )
                .with_boxed_source(e)
            }
        })
}

/// Log an error at a level matching its status and build the response.
fn respond_error(err: &TfRenderError, request_id: &str) -> http::Response<TfRenderResponseBody> {
    let cause = err
        .source
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    if err.status_code.is_server_error() {
        error!(code = %err.code, error = %err.message, cause = %cause, "request failed");
    } else {
        warn!(code = %err.code, error = %err.message, cause = %cause, "request rejected");
    }

    error_to_response(err, request_id)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<TfRenderResponseBody>,
    request_id: &str,
) -> http::Response<TfRenderResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers.insert("server", http::HeaderValue::from_static("tfrender"));

    response
}
