//! Render request wire format.
//!
//! ```json
//! {
//!   "payload": {
//!     "properties": {
//!       "aws-region": "us-east-1",
//!       "acl": "private",
//!       "bucket-name": "my-bucket"
//!     }
//!   }
//! }
//! ```
//!
//! Every level defaults to empty when absent so that a missing field is
//! reported by validation (with a reason) rather than by the JSON decoder.

use serde::{Deserialize, Serialize};

/// Body of a `POST /render` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Request payload.
    #[serde(default)]
    pub payload: RenderPayload,
}

/// The `payload` object of a [`RenderRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Bucket properties.
    #[serde(default)]
    pub properties: RenderProperties,
}

/// The `payload.properties` object of a [`RenderRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProperties {
    /// AWS region the bucket lives in.
    #[serde(rename = "aws-region", default)]
    pub aws_region: String,
    /// Canned ACL, still unchecked at this point.
    #[serde(default)]
    pub acl: String,
    /// Bucket name.
    #[serde(rename = "bucket-name", default)]
    pub bucket_name: String,
}

impl RenderRequest {
    /// Build a request from its three properties.
    #[must_use]
    pub fn new(
        aws_region: impl Into<String>,
        acl: impl Into<String>,
        bucket_name: impl Into<String>,
    ) -> Self {
        Self {
            payload: RenderPayload {
                properties: RenderProperties {
                    aws_region: aws_region.into(),
                    acl: acl.into(),
                    bucket_name: bucket_name.into(),
                },
            },
        }
    }

    /// Shortcut to the bucket properties.
    #[must_use]
    pub fn properties(&self) -> &RenderProperties {
        &self.payload.properties
    }

    /// Decode a request from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is not JSON or a field has the
    /// wrong JSON type.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_decode_full_request() {
        let body = br#"{"payload":{"properties":{"aws-region":"eu-west-1","acl":"public-read","bucket-name":"logs"}}}"#;
        let req = RenderRequest::from_json(body).unwrap();
        assert_eq!(req, RenderRequest::new("eu-west-1", "public-read", "logs"));
    }

    #[test]
    fn test_should_default_missing_fields_to_empty() {
        let req = RenderRequest::from_json(br#"{"payload":{"properties":{"acl":"private"}}}"#)
            .unwrap();
        assert_eq!(req.properties().aws_region, "");
        assert_eq!(req.properties().bucket_name, "");
        assert_eq!(req.properties().acl, "private");
    }

    #[test]
    fn test_should_default_missing_payload() {
        let req = RenderRequest::from_json(b"{}").unwrap();
        assert_eq!(req, RenderRequest::default());
    }

    #[test]
    fn test_should_ignore_unknown_fields() {
        let body = br#"{"kind":"s3","payload":{"properties":{"aws-region":"us-east-1","acl":"private","bucket-name":"b","versioning":true}}}"#;
        let req = RenderRequest::from_json(body).unwrap();
        assert_eq!(req.properties().bucket_name, "b");
    }

    #[test]
    fn test_should_reject_wrong_field_type() {
        let body = br#"{"payload":{"properties":{"aws-region":"us-east-1","acl":7,"bucket-name":"b"}}}"#;
        assert!(RenderRequest::from_json(body).is_err());
    }

    #[test]
    fn test_should_reject_truncated_json() {
        assert!(RenderRequest::from_json(br#"{"payload":{"properties":"#).is_err());
    }
}
