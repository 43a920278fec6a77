//! Response builders and error formatting.

use tfrender_model::error::TfRenderError;

use crate::body::TfRenderResponseBody;

/// Content type for error responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type for rendered documents and the health probe.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Fixed body of the liveness probe.
pub const HEALTH_BODY: &str = "ok";

/// Serialize an error into its `{"error": ...}` JSON body.
#[must_use]
pub fn error_to_json(error: &TfRenderError) -> Vec<u8> {
    serde_json::to_vec(&error.to_response()).expect("JSON serialization of error cannot fail")
}

/// Convert a `TfRenderError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &TfRenderError,
    request_id: &str,
) -> http::Response<TfRenderResponseBody> {
    let body = TfRenderResponseBody::from_bytes(error_to_json(error));

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", JSON_CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid error response")
}

/// Build a `200 OK` plain text response.
#[must_use]
pub fn text_response(text: String) -> http::Response<TfRenderResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", TEXT_CONTENT_TYPE)
        .body(TfRenderResponseBody::from_string(text))
        .expect("valid text response")
}

/// Build the liveness probe response.
#[must_use]
pub fn health_response() -> http::Response<TfRenderResponseBody> {
    text_response(HEALTH_BODY.to_owned())
}
