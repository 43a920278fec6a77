//! Validation for render requests.
//!
//! Rules are plain values: a name, the wire field they check, a predicate and
//! a message. [`RULES`] lists them in the order they are evaluated and
//! reported. Every rule runs; all failures are reported together.

use std::fmt;

use tfrender_model::request::{RenderProperties, RenderRequest};
use tfrender_model::types::BucketCannedAcl;

use crate::spec::ValidatedRequest;

/// A named field rule.
pub struct ValidationRule {
    /// Stable rule identifier, e.g. `acl.oneof`.
    pub name: &'static str,
    /// Wire name of the checked field.
    pub field: &'static str,
    predicate: fn(&RenderProperties) -> bool,
    message: fn(&RenderProperties) -> String,
}

impl ValidationRule {
    /// Whether `props` satisfies this rule.
    #[must_use]
    pub fn check(&self, props: &RenderProperties) -> bool {
        (self.predicate)(props)
    }

    fn failure(&self, props: &RenderProperties) -> RuleFailure {
        RuleFailure {
            rule: self.name,
            field: self.field,
            message: (self.message)(props),
        }
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// The request rules, in evaluation order.
pub static RULES: [ValidationRule; 4] = [
    ValidationRule {
        name: "aws-region.required",
        field: "aws-region",
        predicate: |p| !p.aws_region.is_empty(),
        message: |_| "aws-region is required".to_owned(),
    },
    ValidationRule {
        name: "acl.required",
        field: "acl",
        predicate: |p| !p.acl.is_empty(),
        message: |_| "acl is required".to_owned(),
    },
    ValidationRule {
        name: "acl.oneof",
        field: "acl",
        // An empty acl is already reported by `acl.required`.
        predicate: |p| p.acl.is_empty() || p.acl.parse::<BucketCannedAcl>().is_ok(),
        message: |p| {
            format!(
                "acl must be one of [{}], got {:?}",
                BucketCannedAcl::allowed_values(),
                p.acl
            )
        },
    },
    ValidationRule {
        name: "bucket-name.required",
        field: "bucket-name",
        predicate: |p| !p.bucket_name.is_empty(),
        message: |_| "bucket-name is required".to_owned(),
    },
];

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    /// Name of the failed rule.
    pub rule: &'static str,
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

/// A request failed one or more rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_reasons(.failures))]
pub struct ValidationError {
    /// Failed rules, in evaluation order. Never empty.
    pub failures: Vec<RuleFailure>,
}

fn join_reasons(failures: &[RuleFailure]) -> String {
    failures
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a decoded request against [`RULES`].
///
/// Pure function of its input. On success the returned [`ValidatedRequest`]
/// is the only way to obtain a bucket spec.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every failed rule.
pub fn validate(request: &RenderRequest) -> Result<ValidatedRequest, ValidationError> {
    let props = request.properties();

    let failures: Vec<RuleFailure> = RULES
        .iter()
        .filter(|rule| !rule.check(props))
        .map(|rule| rule.failure(props))
        .collect();

    if !failures.is_empty() {
        return Err(ValidationError { failures });
    }

    let Ok(acl) = props.acl.parse::<BucketCannedAcl>() else {
        return Err(ValidationError {
            failures: vec![RULES[2].failure(props)],
        });
    };

    Ok(ValidatedRequest::new(
        props.aws_region.clone(),
        acl,
        props.bucket_name.clone(),
    ))
}
