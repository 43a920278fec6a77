//! tfrender HTTP response body type.

use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};
use http_body_util::Full;

/// Response body for tfrender HTTP responses.
///
/// Rendered documents, health replies and error payloads are all built in
/// memory before the response is returned.
#[derive(Debug)]
pub struct TfRenderResponseBody(Full<Bytes>);

impl TfRenderResponseBody {
    /// Create a response body from raw bytes.
    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self(Full::new(data.into()))
    }

    /// Create a response body from a string.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self::from_bytes(s.into())
    }
}

impl Body for TfRenderResponseBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, Infallible>>> {
        Pin::new(&mut self.get_mut().0).poll_frame(cx)
    }

    fn is_end_stream(&self) -> bool {
        self.0.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.0.size_hint()
    }
}
