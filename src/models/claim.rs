//! The normalized view of a component's `satisfies` entries.
//!
//! Each schema generation stores its `satisfies` entries differently: one
//! narrative string in 2.0.0, keyed sections afterwards, singular origin and
//! status fields until 3.1.0 added plural lists. [`SatisfiesSchema`] is the
//! accessor surface every generation implements, and [`Claim`] is the owned,
//! version-independent snapshot built from it. The justification index and
//! every downstream consumer work with `Claim`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::references::CoveredBy;

/// A keyed block of text (narrative or parameter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    #[serde(deserialize_with = "super::null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub text: String,
}

impl Section {
    /// Create a section.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Accessors shared by every schema generation's `satisfies` entry.
///
/// Newer accessors degrade on older data: a field a generation does not have
/// yields an empty string or empty list.
pub trait SatisfiesSchema {
    /// Standard the claim refers to.
    fn standard_key(&self) -> &str;

    /// Control within the standard.
    fn control_key(&self) -> &str;

    /// Narrative sections, in document order.
    fn narratives(&self) -> Vec<Section>;

    /// Parameter sections, in document order.
    fn parameters(&self) -> Vec<Section>;

    /// Verifications backing the claim.
    fn covered_by(&self) -> &[CoveredBy];

    /// The singular control origin.
    fn control_origin(&self) -> &str;

    /// Every control origin, de-duplicated and sorted.
    fn control_origins(&self) -> Vec<String>;

    /// The singular implementation status.
    fn implementation_status(&self) -> &str;

    /// Every implementation status, de-duplicated and sorted.
    fn implementation_statuses(&self) -> Vec<String>;

    /// Snapshot every accessor into an owned [`Claim`].
    fn to_claim(&self) -> Claim {
        Claim {
            standard_key: self.standard_key().to_string(),
            control_key: self.control_key().to_string(),
            narratives: self.narratives(),
            parameters: self.parameters(),
            covered_by: self.covered_by().to_vec(),
            control_origin: self.control_origin().to_string(),
            control_origins: self.control_origins(),
            implementation_status: self.implementation_status().to_string(),
            implementation_statuses: self.implementation_statuses(),
        }
    }
}

/// A component's assertion that it satisfies one standard/control pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub standard_key: String,
    pub control_key: String,
    pub narratives: Vec<Section>,
    pub parameters: Vec<Section>,
    pub covered_by: Vec<CoveredBy>,
    pub control_origin: String,
    pub control_origins: Vec<String>,
    pub implementation_status: String,
    pub implementation_statuses: Vec<String>,
}

impl Claim {
    /// `standard@control`, the key used by gap analysis.
    pub fn pair_key(&self) -> String {
        pair_key(&self.standard_key, &self.control_key)
    }

    /// True when `status` is among the implementation statuses.
    pub fn has_implementation_status(&self, status: &str) -> bool {
        self.implementation_statuses.iter().any(|s| s == status)
    }
}

/// Join a standard and control key into the `standard@control` form.
pub fn pair_key(standard_key: &str, control_key: &str) -> String {
    format!("{}@{}", standard_key, control_key)
}

/// Union a singular field with a plural list, dropping empties, sorted.
pub(crate) fn merge_values(plural: &[String], singular: &str) -> Vec<String> {
    let mut set: BTreeSet<&str> = plural
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !singular.is_empty() {
        set.insert(singular);
    }
    set.into_iter().map(str::to_string).collect()
}

/// A singular field as a zero- or one-element list.
pub(crate) fn single_value(singular: &str) -> Vec<String> {
    if singular.is_empty() {
        Vec::new()
    } else {
        vec![singular.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_values_dedups_and_sorts() {
        let plural = vec!["shared".to_string(), "inherited".to_string()];
        assert_eq!(merge_values(&plural, "shared"), ["inherited", "shared"]);
    }

    #[test]
    fn merge_values_uses_singular_when_plural_empty() {
        assert_eq!(merge_values(&[], "partial"), ["partial"]);
        assert!(merge_values(&[], "").is_empty());
    }

    #[test]
    fn single_value_skips_empty() {
        assert!(single_value("").is_empty());
        assert_eq!(single_value("planned"), ["planned"]);
    }

    #[test]
    fn pair_key_joins_with_at() {
        let claim = Claim {
            standard_key: "NIST-800-53".into(),
            control_key: "AC-2".into(),
            ..Default::default()
        };
        assert_eq!(claim.pair_key(), "NIST-800-53@AC-2");
    }

    #[test]
    fn has_implementation_status_checks_plural_list() {
        let claim = Claim {
            implementation_status: "partial".into(),
            implementation_statuses: vec!["partial".into(), "planned".into()],
            ..Default::default()
        };
        assert!(claim.has_implementation_status("planned"));
        assert!(!claim.has_implementation_status("complete"));
    }
}
