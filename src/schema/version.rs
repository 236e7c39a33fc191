//! Semantic versions for descriptor schemas.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Semantic Versioning 2.0.0 grammar.
static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)?$",
    )
    .expect("SEMVER must compile")
});

/// A string that is not a semantic version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a semantic version")]
pub struct VersionParseError(pub String);

/// `major.minor.patch[-pre]`. Build metadata is accepted and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl SchemaVersion {
    /// A release version with no pre-release tag.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }
}

impl FromStr for SchemaVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError(s.to_string());
        let caps = SEMVER.captures(s).ok_or_else(err)?;
        let number = |idx: usize| -> Result<u64, VersionParseError> {
            caps.get(idx)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(err)
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_versions() {
        let v: SchemaVersion = "3.1.0".parse().unwrap();
        assert_eq!(v, SchemaVersion::new(3, 1, 0));
        assert_eq!(v.to_string(), "3.1.0");
    }

    #[test]
    fn keeps_pre_release_and_drops_build() {
        let v: SchemaVersion = "3.1.0-rc.1+build.7".parse().unwrap();
        assert_eq!(v.pre.as_deref(), Some("rc.1"));
        assert_eq!(v.to_string(), "3.1.0-rc.1");
        assert_ne!(v, SchemaVersion::new(3, 1, 0));
    }

    #[test]
    fn rejects_partial_versions() {
        assert!("2.0".parse::<SchemaVersion>().is_err());
        assert!("3".parse::<SchemaVersion>().is_err());
        assert!("v3.0.0".parse::<SchemaVersion>().is_err());
        assert!("".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn rejects_leading_zeros() {
        assert!("03.0.0".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn rejects_overflowing_components() {
        let err = "99999999999999999999999.0.0"
            .parse::<SchemaVersion>()
            .unwrap_err();
        assert!(err.to_string().contains("99999999999999999999999"));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&SchemaVersion::new(2, 0, 0)).unwrap();
        assert_eq!(json, "\"2.0.0\"");
    }
}
