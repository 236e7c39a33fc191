//! Version dispatch for component descriptors.
//!
//! A descriptor's `schema_version` selects the decoder registered for that
//! exact version. Versions are semantic-version strings; the bare number
//! `2.0` predates semver tagging and is read as `2.0.0`.

use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use super::version::SchemaVersion;
use crate::error::{MasonryError, Result};
use crate::models::component::{v2_0_0, v3_0_0, v3_1_0};
use crate::models::VersionedComponent;

/// Decodes a descriptor document into one component generation.
pub type ComponentParser = fn(Value) -> std::result::Result<VersionedComponent, serde_yaml::Error>;

/// The only numeric version accepted, mapped to its semver form.
const LEGACY_NUMERIC_VERSION: f64 = 2.0;

static BUILTINS: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::with_builtins);

/// Maps schema versions to decoders.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    parsers: HashMap<SchemaVersion, ComponentParser>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in generation.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(v2_0_0::VERSION, |value| {
            serde_yaml::from_value::<v2_0_0::Component>(value).map(Into::into)
        });
        registry.register(v3_0_0::VERSION, |value| {
            serde_yaml::from_value::<v3_0_0::Component>(value).map(Into::into)
        });
        registry.register(v3_1_0::VERSION, |value| {
            serde_yaml::from_value::<v3_1_0::Component>(value).map(Into::into)
        });
        registry
    }

    /// Register a decoder, returning the one it replaces.
    pub fn register(
        &mut self,
        version: SchemaVersion,
        parser: ComponentParser,
    ) -> Option<ComponentParser> {
        self.parsers.insert(version, parser)
    }

    /// Registered versions, ascending.
    pub fn versions(&self) -> Vec<&SchemaVersion> {
        let mut versions: Vec<_> = self.parsers.keys().collect();
        versions.sort();
        versions
    }

    /// Decode `data` with the parser its `schema_version` selects.
    ///
    /// `file` is only used in error messages.
    pub fn resolve(&self, data: &[u8], file: &Path) -> Result<VersionedComponent> {
        let document: Value =
            serde_yaml::from_slice(data).map_err(|e| MasonryError::MalformedDescriptor {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;

        let version = extract_version(&document, file)?;
        let parser = self
            .parsers
            .get(&version)
            .ok_or_else(|| MasonryError::UnsupportedVersion {
                version: version.to_string(),
                file: file.to_path_buf(),
            })?;

        debug!("Decoding {} as schema {}", file.display(), version);
        parser(document).map_err(|e| MasonryError::MalformedDescriptor {
            file: file.to_path_buf(),
            message: format!("schema {}: {}", version, e),
        })
    }
}

/// Resolve a component descriptor against the built-in registry.
pub fn parse_component(data: &[u8], file: &Path) -> Result<VersionedComponent> {
    BUILTINS.resolve(data, file)
}

fn extract_version(document: &Value, file: &Path) -> Result<SchemaVersion> {
    let missing = || MasonryError::MissingVersion {
        file: file.to_path_buf(),
    };

    match document.get("schema_version") {
        Some(Value::String(s)) => s.trim().parse().map_err(|_| missing()),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f == LEGACY_NUMERIC_VERSION => Ok(SchemaVersion::new(2, 0, 0)),
            _ => Err(MasonryError::VersionNotSemver {
                value: n.to_string(),
                file: file.to_path_buf(),
            }),
        },
        _ => Err(missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentSchema;

    fn resolve(yaml: &str) -> Result<VersionedComponent> {
        parse_component(yaml.as_bytes(), Path::new("component.yaml"))
    }

    #[test]
    fn dispatches_semver_strings() {
        let c = resolve("schema_version: 2.0.0\nname: EC2\nsatisfies: []\n").unwrap();
        assert!(matches!(c, VersionedComponent::V2_0_0(_)));

        let c = resolve("schema_version: \"3.0.0\"\nname: EC2\n").unwrap();
        assert!(matches!(c, VersionedComponent::V3_0_0(_)));

        let c = resolve("schema_version: 3.1.0\nname: EC2\n").unwrap();
        assert!(matches!(c, VersionedComponent::V3_1_0(_)));
        assert_eq!(c.version().to_string(), "3.1.0");
    }

    #[test]
    fn grandfathers_numeric_two() {
        let c = resolve("schema_version: 2.0\nname: EC2\n").unwrap();
        assert!(matches!(c, VersionedComponent::V2_0_0(_)));
        assert_eq!(c.version().to_string(), "2.0.0");
    }

    #[test]
    fn rejects_other_numeric_versions() {
        let err = resolve("schema_version: 3.1\n").unwrap_err();
        assert!(matches!(err, MasonryError::VersionNotSemver { ref value, .. } if value == "3.1"));

        let err = resolve("schema_version: 2\n").unwrap_err();
        assert!(matches!(err, MasonryError::VersionNotSemver { .. }));
    }

    #[test]
    fn missing_or_unparsable_version() {
        for yaml in [
            "name: EC2\n",
            "schema_version: ~\n",
            "schema_version: three\n",
            "schema_version: [3, 0, 0]\n",
        ] {
            let err = resolve(yaml).unwrap_err();
            assert!(matches!(err, MasonryError::MissingVersion { .. }), "{}", yaml);
        }
    }

    #[test]
    fn well_formed_but_unregistered() {
        let err = resolve("schema_version: 4.0.0\n").unwrap_err();
        assert!(
            matches!(err, MasonryError::UnsupportedVersion { ref version, .. } if version == "4.0.0")
        );
    }

    #[test]
    fn structural_errors_are_malformed() {
        let err = resolve("schema_version: 3.0.0\nsatisfies: 12\n").unwrap_err();
        assert!(matches!(err, MasonryError::MalformedDescriptor { .. }));
        assert!(err.to_string().contains("component.yaml"));

        let err = resolve("schema_version: 3.0.0\nname: [").unwrap_err();
        assert!(matches!(err, MasonryError::MalformedDescriptor { .. }));
    }

    #[test]
    fn registry_accepts_new_versions() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.versions().is_empty());
        let previous = registry.register(SchemaVersion::new(9, 0, 0), |value| {
            serde_yaml::from_value::<v3_1_0::Component>(value).map(Into::into)
        });
        assert!(previous.is_none());

        let c = registry
            .resolve(b"schema_version: 9.0.0\nname: Future\n", Path::new("c.yaml"))
            .unwrap();
        assert_eq!(c.name(), "Future");
        assert_eq!(registry.versions(), [&SchemaVersion::new(9, 0, 0)]);
    }

    #[test]
    fn builtin_versions_are_listed_in_order() {
        let registry = SchemaRegistry::with_builtins();
        let versions: Vec<String> = registry.versions().iter().map(|v| v.to_string()).collect();
        assert_eq!(versions, ["2.0.0", "3.0.0", "3.1.0"]);
    }
}
