//! Bucket spec: the validated domain record rendered into Terraform.

use serde::Serialize;

use tfrender_model::types::BucketCannedAcl;

/// A request that passed every validation rule.
///
/// Only [`crate::validation::validate`] can produce one, which is what keeps a
/// [`BucketSpec`] from ever being built out of unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    region: String,
    acl: BucketCannedAcl,
    bucket_name: String,
}

impl ValidatedRequest {
    pub(crate) fn new(region: String, acl: BucketCannedAcl, bucket_name: String) -> Self {
        Self {
            region,
            acl,
            bucket_name,
        }
    }

    /// Validated region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Validated ACL.
    #[must_use]
    pub fn acl(&self) -> BucketCannedAcl {
        self.acl
    }

    /// Validated bucket name.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

/// Template input. Serializes as `{region, acl, bucket_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSpec {
    region: String,
    acl: BucketCannedAcl,
    bucket_name: String,
}

impl BucketSpec {
    /// Region the bucket is created in.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Canned ACL applied to the bucket.
    #[must_use]
    pub fn acl(&self) -> BucketCannedAcl {
        self.acl
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

/// Map a validated request onto a bucket spec. Cannot fail.
#[must_use]
pub fn to_bucket_spec(validated: ValidatedRequest) -> BucketSpec {
    BucketSpec {
        region: validated.region,
        acl: validated.acl,
        bucket_name: validated.bucket_name,
    }
}

impl From<ValidatedRequest> for BucketSpec {
    fn from(validated: ValidatedRequest) -> Self {
        to_bucket_spec(validated)
    }
}
