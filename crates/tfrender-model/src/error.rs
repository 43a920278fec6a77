//! tfrender error types.
//!
//! Every error leaves the service as a fixed JSON shape:
//!
//! ```json
//! { "error": "acl is required" }
//! ```
//!
//! Server-side failures carry a generic message; the underlying cause is kept
//! in [`TfRenderError::source`] for logging and never serialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message returned for any request body that cannot be decoded.
pub const INVALID_REQUEST_BODY: &str = "invalid request body";

/// Message returned when the render step fails.
pub const RENDER_FAILED: &str = "failed to render terraform configuration";

/// Message returned when request handling panics or fails unexpectedly.
pub const INTERNAL_ERROR: &str = "internal server error";

/// Well-known tfrender error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TfRenderErrorCode {
    /// Body is not JSON or does not match the request shape.
    InvalidRequestBody,
    /// Body decoded but a field rule failed.
    ValidationFailed,
    /// Body exceeds the configured size limit.
    PayloadTooLarge,
    /// No route for the requested path.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
    /// Template substitution failed.
    RenderFailed,
    /// Unexpected fault, including a caught panic.
    InternalError,
}

impl TfRenderErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequestBody => "InvalidRequestBody",
            Self::ValidationFailed => "ValidationFailed",
            Self::PayloadTooLarge => "PayloadTooLarge",
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::RenderFailed => "RenderFailed",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidRequestBody | Self::ValidationFailed => http::StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => http::StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::RenderFailed | Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for TfRenderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tfrender error response.
#[derive(Debug)]
pub struct TfRenderError {
    /// The error code.
    pub code: TfRenderErrorCode,
    /// Client-facing message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any. Logged, never returned.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for TfRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TfRenderError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for TfRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl TfRenderError {
    /// Create a new `TfRenderError` with a custom message.
    #[must_use]
    pub fn with_message(code: TfRenderErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Set an already boxed source error.
    #[must_use]
    pub fn with_boxed_source(mut self, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }

    /// The JSON body sent to the client for this error.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.message.clone(),
        }
    }

    // -- Convenience constructors --

    /// The body could not be decoded. The decoder detail is kept as source.
    #[must_use]
    pub fn invalid_request_body(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_message(TfRenderErrorCode::InvalidRequestBody, INVALID_REQUEST_BODY)
            .with_source(source)
    }

    /// A validation rule failed; the reason is returned to the client.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::with_message(TfRenderErrorCode::ValidationFailed, reason)
    }

    /// Request body over the size limit.
    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::with_message(TfRenderErrorCode::PayloadTooLarge, "request body too large")
    }

    /// Unknown route.
    #[must_use]
    pub fn not_found(path: &str) -> Self {
        Self::with_message(TfRenderErrorCode::NotFound, format!("route not found: {path}"))
    }

    /// Known route, wrong method.
    #[must_use]
    pub fn method_not_allowed(method: &http::Method, path: &str) -> Self {
        Self::with_message(
            TfRenderErrorCode::MethodNotAllowed,
            format!("method {method} not allowed on {path}"),
        )
    }

    /// Template rendering failed. The cause is kept as source.
    #[must_use]
    pub fn render_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_message(TfRenderErrorCode::RenderFailed, RENDER_FAILED).with_source(source)
    }

    /// Unexpected fault.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::with_message(TfRenderErrorCode::InternalError, INTERNAL_ERROR)
    }
}

/// The fixed `{"error": string}` body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
