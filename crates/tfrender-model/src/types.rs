//! Domain enums shared by the validator and the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canned ACL accepted for a rendered bucket.
///
/// The set is closed: anything else, including other S3 canned ACLs such as
/// `public-read-write`, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketCannedAcl {
    /// Owner gets full control, nobody else has access.
    #[serde(rename = "private")]
    Private,
    /// Anyone may read.
    #[serde(rename = "public-read")]
    PublicRead,
    /// Any authenticated AWS principal may read.
    #[serde(rename = "authenticated-read")]
    AuthenticatedRead,
}

impl BucketCannedAcl {
    /// All accepted values, in the order they are reported to clients.
    pub const ALL: [Self; 3] = [Self::Private, Self::PublicRead, Self::AuthenticatedRead];

    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::AuthenticatedRead => "authenticated-read",
        }
    }

    /// Space separated list of the accepted values, e.g. for error messages.
    #[must_use]
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for BucketCannedAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the accepted canned ACLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAcl(pub String);

impl fmt::Display for UnknownAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown canned ACL: {:?}", self.0)
    }
}

impl std::error::Error for UnknownAcl {}

impl FromStr for BucketCannedAcl {
    type Err = UnknownAcl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "public-read" => Ok(Self::PublicRead),
            "authenticated-read" => Ok(Self::AuthenticatedRead),
            other => Err(UnknownAcl(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_every_accepted_acl() {
        for acl in BucketCannedAcl::ALL {
            assert_eq!(acl.as_str().parse::<BucketCannedAcl>().unwrap(), acl);
        }
    }

    #[test]
    fn test_should_reject_acl_outside_closed_set() {
        assert!("public-read-write".parse::<BucketCannedAcl>().is_err());
        assert!("Private".parse::<BucketCannedAcl>().is_err());
        assert!(" private".parse::<BucketCannedAcl>().is_err());
        assert!("".parse::<BucketCannedAcl>().is_err());
    }

    #[test]
    fn test_should_list_allowed_values() {
        assert_eq!(
            BucketCannedAcl::allowed_values(),
            "private public-read authenticated-read"
        );
    }

    #[test]
    fn test_should_serialize_as_wire_string() {
        let json = serde_json::to_string(&BucketCannedAcl::AuthenticatedRead).unwrap();
        assert_eq!(json, "\"authenticated-read\"");
    }
}
