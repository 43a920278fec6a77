//! Core business logic for tfrender.
//!
//! Validates a bucket description, maps it to a [`spec::BucketSpec`] and
//! renders it through the bundled Terraform template.
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handler;
pub mod provider;
pub mod renderer;
pub mod spec;
pub mod validation;

pub use config::{LogFormat, TfRenderConfig};
pub use error::RenderError;
pub use handler::TfRenderCoreHandler;
pub use provider::TfRenderProvider;
pub use renderer::BucketRenderer;
pub use spec::{BucketSpec, ValidatedRequest, to_bucket_spec};
pub use validation::{ValidationError, validate};
