//! References a component uses to point at evidence.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A named pointer to supporting material (document, URL, image).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralReference {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// A reference that verifies a control and can be pointed at by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationReference {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Points a claim at a verification by key.
///
/// An empty `component_key` refers to the component that owns the claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CoveredBy {
    #[serde(deserialize_with = "null_as_default")]
    pub component_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_key: String,
}

impl CoveredBy {
    /// The component this entry refers to, resolving the empty key to `owner`.
    pub fn resolved_component<'a>(&'a self, owner: &'a str) -> &'a str {
        if self.component_key.is_empty() {
            owner
        } else {
            &self.component_key
        }
    }
}

/// Find a verification by key.
pub fn find_verification<'a>(
    verifications: &'a [VerificationReference],
    key: &str,
) -> Option<&'a VerificationReference> {
    verifications.iter().find(|v| v.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_reference_reads_inline_fields() {
        let yaml = r#"
key: EC2_Verification_1
name: EC2 Verification 1
path: artifact-ec2-1.png
type: Image
"#;
        let v: VerificationReference = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(v.key, "EC2_Verification_1");
        assert_eq!(v.kind, "Image");
    }

    #[test]
    fn find_verification_by_key() {
        let verifications = vec![
            VerificationReference {
                key: "a".into(),
                name: "First".into(),
                ..Default::default()
            },
            VerificationReference {
                key: "b".into(),
                name: "Second".into(),
                ..Default::default()
            },
        ];
        assert_eq!(
            find_verification(&verifications, "b").map(|v| v.name.as_str()),
            Some("Second")
        );
        assert!(find_verification(&verifications, "c").is_none());
    }

    #[test]
    fn covered_by_defaults_to_owner() {
        let local = CoveredBy {
            component_key: String::new(),
            verification_key: "v1".into(),
        };
        let remote = CoveredBy {
            component_key: "s3".into(),
            verification_key: "v1".into(),
        };
        assert_eq!(local.resolved_component("ec2"), "ec2");
        assert_eq!(remote.resolved_component("ec2"), "s3");
    }
}
