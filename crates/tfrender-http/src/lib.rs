//! HTTP service layer for tfrender.
//!
//! This crate provides:
//!
//! - **Router**: maps `POST /render` and `GET /healthz` to operations
//! - **Handler trait**: the boundary between HTTP and the render pipeline
//! - **Service**: hyper `Service` implementation with body limits and a panic boundary
//! - **Response helpers**: plain text success and `{"error": ...}` JSON errors

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::TfRenderResponseBody;
pub use dispatch::{HandlerFuture, TfRenderHandler};
pub use service::{TfRenderHttpConfig, TfRenderHttpService};
