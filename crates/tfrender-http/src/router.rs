//! tfrender request router.
//!
//! Two fixed routes:
//!
//! ```text
//! POST /render   -> TfRenderOperation::Render
//! GET  /healthz  -> TfRenderOperation::HealthCheck
//! ```

use tfrender_model::error::TfRenderError;
use tfrender_model::operations::TfRenderOperation;

/// Resolve an operation from the request method and path.
///
/// Unknown paths yield a `NotFound` error, known paths requested with the
/// wrong method yield `MethodNotAllowed`.
pub fn resolve_operation(
    method: &http::Method,
    path: &str,
) -> Result<TfRenderOperation, TfRenderError> {
    let op = TfRenderOperation::from_path(path).ok_or_else(|| TfRenderError::not_found(path))?;

    if *method != op.method() {
        return Err(TfRenderError::method_not_allowed(method, path));
    }

    Ok(op)
}
