//! Standards: named catalogs of controls.
//!
//! A standard descriptor is a `name` plus an inline map of control key to
//! control details:
//!
//! ```yaml
//! name: NIST-800-53
//! AC-2:
//!   family: AC
//!   name: Account Management
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{null_as_default, scalar_to_string};
use crate::error::{MasonryError, Result};
use crate::sorting::natural_cmp;

/// One requirement within a standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    #[serde(deserialize_with = "null_as_default")]
    pub family: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A named control catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standard {
    pub name: String,
    pub controls: BTreeMap<String, Control>,
}

#[derive(Deserialize)]
struct RawStandard {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(flatten)]
    rest: serde_yaml::Mapping,
}

impl<'de> Deserialize<'de> for Standard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawStandard::deserialize(deserializer)?;
        let mut controls = BTreeMap::new();
        for (key, value) in raw.rest {
            // Only mapping values are controls; stray scalars are ignored.
            if !value.is_mapping() {
                continue;
            }
            let Some(key) = scalar_to_string(&key) else {
                continue;
            };
            let control: Control =
                serde_yaml::from_value(value).map_err(serde::de::Error::custom)?;
            controls.insert(key, control);
        }
        Ok(Self {
            name: raw.name,
            controls,
        })
    }
}

impl Standard {
    /// Decode a standard descriptor.
    pub fn from_yaml(data: &[u8], file: &Path) -> Result<Self> {
        serde_yaml::from_slice(data).map_err(|e| MasonryError::MalformedDescriptor {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The standard's key.
    pub fn key(&self) -> &str {
        &self.name
    }

    /// Look up a control by key.
    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls.get(key)
    }

    /// Control keys in natural order.
    pub fn sorted_control_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.controls.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| natural_cmp(a, b));
        keys
    }

    /// Number of controls in the catalog.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIST: &str = r#"
name: NIST-800-53
AC-2:
  family: AC
  name: Account Management
  description: The organization manages accounts.
AC-12:
  family: AC
  name: Session Termination
CM-2:
  family: CM
  name: Baseline Configuration
"#;

    #[test]
    fn reads_inline_controls() {
        let standard = Standard::from_yaml(NIST.as_bytes(), Path::new("NIST.yaml")).unwrap();
        assert_eq!(standard.key(), "NIST-800-53");
        assert_eq!(standard.control_count(), 3);
        let control = standard.control("AC-2").unwrap();
        assert_eq!(control.family, "AC");
        assert_eq!(control.name, "Account Management");
        assert_eq!(control.description, "The organization manages accounts.");
        assert_eq!(standard.control("CM-2").unwrap().description, "");
    }

    #[test]
    fn control_keys_sort_naturally() {
        let standard = Standard::from_yaml(NIST.as_bytes(), Path::new("NIST.yaml")).unwrap();
        assert_eq!(standard.sorted_control_keys(), ["AC-2", "AC-12", "CM-2"]);
    }

    #[test]
    fn numeric_control_keys_become_strings() {
        let yaml = "name: PCI-DSS-MAY-2015\n1.1:\n  family: PCI\n  name: Firewall\n";
        let standard = Standard::from_yaml(yaml.as_bytes(), Path::new("PCI.yaml")).unwrap();
        assert!(standard.control("1.1").is_some());
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let err = Standard::from_yaml(b"name: [unterminated", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, MasonryError::MalformedDescriptor { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
