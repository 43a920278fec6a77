//! Integration tests for the tfrender server.
//!
//! These tests require a running server at `localhost:8080`.
//! They are marked `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p tfrender-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("TFRENDER_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// Create an HTTP client for the server.
#[must_use]
pub fn client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Build a render request body.
#[must_use]
pub fn render_body(region: &str, acl: &str, bucket: &str) -> serde_json::Value {
    serde_json::json!({
        "payload": {
            "properties": {
                "aws-region": region,
                "acl": acl,
                "bucket-name": bucket,
            }
        }
    })
}

/// POST a raw body to `/render`.
pub async fn post_render(
    client: &reqwest::Client,
    body: impl Into<reqwest::Body>,
) -> reqwest::Response {
    client
        .post(format!("{}/render", endpoint_url()))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("request to {} failed: {e}", endpoint_url()))
}

/// Read the `error` field of a JSON error response.
pub async fn error_message(resp: reqwest::Response) -> String {
    let body: serde_json::Value = resp.json().await.expect("error body should be JSON");
    body["error"]
        .as_str()
        .expect("error body should have an error string")
        .to_owned()
}

mod test_error;
mod test_health;
mod test_render;
