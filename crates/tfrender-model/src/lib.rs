//! Model types for tfrender.
//!
//! This crate holds everything that crosses the wire or the HTTP/business
//! boundary: the render request body, the closed set of canned bucket ACLs,
//! the operation enum resolved by the router, and the service error type with
//! its `{"error": "..."}` response shape.
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod operations;
pub mod request;
pub mod types;

pub use error::{ErrorResponse, TfRenderError, TfRenderErrorCode};
pub use operations::TfRenderOperation;
pub use request::{RenderPayload, RenderProperties, RenderRequest};
pub use types::BucketCannedAcl;
