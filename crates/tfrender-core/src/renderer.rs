//! Terraform template rendering.
//!
//! The bucket template is compiled into the binary and parsed once, when the
//! [`BucketRenderer`] is built at startup. The parsed form is immutable and
//! shared by every request.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::RenderError;
use crate::spec::BucketSpec;

/// Name the bundled template is registered under.
pub const TEMPLATE_NAME: &str = "s3_bucket.tf";

/// The bundled `aws_s3_bucket` template.
pub const BUNDLED_TEMPLATE: &str = include_str!("../templates/s3_bucket.tf.j2");

/// Renders a [`BucketSpec`] through a pre-parsed template.
#[derive(Debug)]
pub struct BucketRenderer {
    env: Environment<'static>,
    name: &'static str,
}

impl BucketRenderer {
    /// Parse the bundled template.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateLoad`] if the bundled template does not
    /// parse. Callers should treat this as fatal.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_source(TEMPLATE_NAME, BUNDLED_TEMPLATE)
    }

    /// Parse `source` and register it as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateLoad`] if `source` does not parse.
    pub fn from_source(name: &'static str, source: &'static str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(name, source)
            .map_err(|source| RenderError::TemplateLoad { name, source })?;

        tracing::debug!(template = name, "template parsed");
        Ok(Self { env, name })
    }

    /// Substitute `spec` into the template and return the document verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Substitution`] when the template references a
    /// value the bucket spec does not provide.
    pub fn render(&self, spec: &BucketSpec) -> Result<String, RenderError> {
        let name = self.name;
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(spec))
            .map_err(|source| RenderError::Substitution { name, source })
    }
}
