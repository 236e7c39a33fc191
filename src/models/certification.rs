//! Certifications: the standard/control pairs a system must cover.
//!
//! Each standard maps to its required control keys, either as a map whose
//! keys are the controls or as a plain list:
//!
//! ```yaml
//! name: LATO
//! standards:
//!   NIST-800-53:
//!     CM-2: {}
//!     AC-2: ~
//!   PCI-DSS-MAY-2015: [1.1, 2.1]
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::{null_as_default, scalar_to_string};
use crate::error::{MasonryError, Result};
use crate::sorting::natural_cmp;

/// A named subset of standards and controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "control_keys")]
    pub standards: BTreeMap<String, BTreeSet<String>>,
}

fn control_keys<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, BTreeSet<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let raw: Option<serde_yaml::Mapping> = Option::deserialize(deserializer)?;
    let mut standards = BTreeMap::new();
    for (standard, controls) in raw.unwrap_or_default() {
        let standard = scalar_to_string(&standard)
            .ok_or_else(|| D::Error::custom("standard keys must be scalars"))?;
        let keys: BTreeSet<String> = match controls {
            Value::Null => BTreeSet::new(),
            Value::Mapping(map) => map.keys().filter_map(scalar_to_string).collect(),
            Value::Sequence(seq) => seq.iter().filter_map(scalar_to_string).collect(),
            other => {
                return Err(D::Error::custom(format!(
                    "controls for {} must be a map or a list, found {:?}",
                    standard, other
                )))
            }
        };
        standards.insert(standard, keys);
    }
    Ok(standards)
}

impl Certification {
    /// Decode a certification descriptor.
    pub fn from_yaml(data: &[u8], file: &Path) -> Result<Self> {
        serde_yaml::from_slice(data).map_err(|e| MasonryError::MalformedDescriptor {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The certification's name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Standard keys in natural order.
    pub fn sorted_standards(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.standards.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| natural_cmp(a, b));
        keys
    }

    /// Control keys required for `standard`, in natural order. Empty when the
    /// standard is not part of the certification.
    pub fn control_keys_for(&self, standard: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .standards
            .get(standard)
            .map(|controls| controls.iter().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_by(|a, b| natural_cmp(a, b));
        keys
    }

    /// Every required `(standard, control)` pair, both levels naturally sorted.
    pub fn required_pairs(&self) -> Vec<(&str, &str)> {
        self.sorted_standards()
            .into_iter()
            .flat_map(|standard| {
                self.control_keys_for(standard)
                    .into_iter()
                    .map(move |control| (standard, control))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATO: &str = r#"
name: LATO
standards:
  NIST-800-53:
    CM-2: {}
    AC-12: ~
    AC-2:
  PCI-DSS-MAY-2015: [1.1, "2.1"]
"#;

    fn lato() -> Certification {
        Certification::from_yaml(LATO.as_bytes(), Path::new("LATO.yaml")).unwrap()
    }

    #[test]
    fn reads_map_and_list_forms() {
        let cert = lato();
        assert_eq!(cert.key(), "LATO");
        assert_eq!(cert.control_keys_for("NIST-800-53"), ["AC-2", "AC-12", "CM-2"]);
        assert_eq!(cert.control_keys_for("PCI-DSS-MAY-2015"), ["1.1", "2.1"]);
    }

    #[test]
    fn unknown_standard_has_no_controls() {
        assert!(lato().control_keys_for("FedRAMP").is_empty());
    }

    #[test]
    fn required_pairs_are_sorted_at_both_levels() {
        let cert = lato();
        assert_eq!(
            cert.required_pairs(),
            [
                ("NIST-800-53", "AC-2"),
                ("NIST-800-53", "AC-12"),
                ("NIST-800-53", "CM-2"),
                ("PCI-DSS-MAY-2015", "1.1"),
                ("PCI-DSS-MAY-2015", "2.1"),
            ]
        );
    }

    #[test]
    fn null_standards_is_empty() {
        let cert = Certification::from_yaml(b"name: Empty\nstandards: ~\n", Path::new("Empty.yaml"))
            .unwrap();
        assert!(cert.sorted_standards().is_empty());
    }

    #[test]
    fn scalar_controls_are_rejected() {
        let err = Certification::from_yaml(
            b"name: Bad\nstandards:\n  NIST-800-53: CM-2\n",
            Path::new("Bad.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, MasonryError::MalformedDescriptor { .. }));
    }
}
