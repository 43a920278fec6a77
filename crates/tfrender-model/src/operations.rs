//! tfrender operation enum.

use std::fmt;

/// All routable tfrender operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TfRenderOperation {
    /// `POST /render`: validate a bucket description and render it.
    Render,
    /// `GET /healthz`: liveness probe.
    HealthCheck,
}

impl TfRenderOperation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Render => "Render",
            Self::HealthCheck => "HealthCheck",
        }
    }

    /// The HTTP method this operation is served on.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::Render => http::Method::POST,
            Self::HealthCheck => http::Method::GET,
        }
    }

    /// Resolve the operation registered on a path, regardless of method.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/render" => Some(Self::Render),
            "/healthz" => Some(Self::HealthCheck),
            _ => None,
        }
    }
}

impl fmt::Display for TfRenderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
