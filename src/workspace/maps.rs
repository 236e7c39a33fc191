//! Thread-safe component and standard maps.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::justifications::JustificationIndex;
use crate::error::{MasonryError, Result};
use crate::models::{ComponentSchema, Standard, VersionedComponent};
use crate::sorting::natural_cmp;

/// Loaded components keyed by component key.
#[derive(Debug, Default)]
pub struct ComponentMap {
    mapping: RwLock<HashMap<String, Arc<VersionedComponent>>>,
}

impl ComponentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `component` unless its key is taken, then index its claims.
    ///
    /// The map's write lock is held until the claims are indexed, so a
    /// duplicate never contributes to `index`. Lock order is map, then index.
    pub fn compare_and_add(
        &self,
        component: VersionedComponent,
        index: &JustificationIndex,
    ) -> Result<Arc<VersionedComponent>> {
        let mut mapping = self.mapping.write();
        let key = component.key().to_string();
        if mapping.contains_key(&key) {
            return Err(MasonryError::DuplicateComponentKey { key });
        }
        let component = Arc::new(component);
        mapping.insert(key, Arc::clone(&component));
        index.load_mappings(component.as_ref());
        Ok(component)
    }

    /// Look up a component by key.
    pub fn get(&self, key: &str) -> Option<Arc<VersionedComponent>> {
        self.mapping.read().get(key).cloned()
    }

    /// Every component, naturally sorted by key.
    pub fn sorted(&self) -> Vec<Arc<VersionedComponent>> {
        let mut components: Vec<_> = self.mapping.read().values().cloned().collect();
        components.sort_by(|a, b| natural_cmp(a.key(), b.key()));
        components
    }

    pub fn len(&self) -> usize {
        self.mapping.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.read().is_empty()
    }
}

/// Loaded standards keyed by standard name. A later insert replaces an
/// earlier one with the same name.
#[derive(Debug, Default)]
pub struct StandardMap {
    mapping: RwLock<HashMap<String, Arc<Standard>>>,
}

impl StandardMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a standard, returning the one it replaces.
    pub fn add(&self, standard: Standard) -> Option<Arc<Standard>> {
        self.mapping
            .write()
            .insert(standard.name.clone(), Arc::new(standard))
    }

    pub fn get(&self, key: &str) -> Option<Arc<Standard>> {
        self.mapping.read().get(key).cloned()
    }

    /// Every standard, naturally sorted by name.
    pub fn sorted(&self) -> Vec<Arc<Standard>> {
        let mut standards: Vec<_> = self.mapping.read().values().cloned().collect();
        standards.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        standards
    }

    pub fn len(&self) -> usize {
        self.mapping.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::component::v3_1_0;
    use std::thread;

    fn component(key: &str, control: &str) -> VersionedComponent {
        v3_1_0::Component {
            key: key.into(),
            satisfies: vec![v3_1_0::Satisfies {
                standard_key: "NIST-800-53".into(),
                control_key: control.into(),
                ..Default::default()
            }],
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn duplicate_key_is_rejected_and_not_indexed() {
        let map = ComponentMap::new();
        let index = JustificationIndex::new();

        map.compare_and_add(component("ec2", "AC-2"), &index).unwrap();
        let err = map
            .compare_and_add(component("ec2", "CM-2"), &index)
            .unwrap_err();

        assert!(matches!(err, MasonryError::DuplicateComponentKey { ref key } if key == "ec2"));
        assert_eq!(err.to_string(), "Component: ec2 exists!");
        assert_eq!(map.len(), 1);
        assert!(index.get("NIST-800-53", "CM-2").is_empty());
        assert_eq!(index.get("NIST-800-53", "AC-2").len(), 1);
    }

    #[test]
    fn concurrent_duplicates_admit_exactly_one() {
        let map = ComponentMap::new();
        let index = JustificationIndex::new();

        let (map_ref, index_ref) = (&map, &index);
        let failures = thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    scope.spawn(move || map_ref.compare_and_add(component("s3", "AC-2"), index_ref))
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|h| h.join().ok())
                .filter(|r| r.is_err())
                .count()
        });

        assert_eq!(failures, 15);
        assert_eq!(map.len(), 1);
        assert_eq!(index.get("NIST-800-53", "AC-2").len(), 1);
    }

    #[test]
    fn sorted_uses_natural_order() {
        let map = ComponentMap::new();
        let index = JustificationIndex::new();
        for key in ["c10", "c2", "c1"] {
            map.compare_and_add(component(key, "AC-2"), &index).unwrap();
        }
        let keys: Vec<String> = map.sorted().iter().map(|c| c.key().to_string()).collect();
        assert_eq!(keys, ["c1", "c2", "c10"]);
        assert!(map.get("c2").is_some());
        assert!(map.get("c3").is_none());
    }

    #[test]
    fn standards_replace_by_name() {
        let map = StandardMap::new();
        let standard = |name: &str| Standard {
            name: name.into(),
            ..Default::default()
        };
        assert!(map.add(standard("NIST-800-53")).is_none());
        assert!(map.add(standard("NIST-800-53")).is_some());
        map.add(standard("FRIST-800-53"));
        let names: Vec<String> = map.sorted().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["FRIST-800-53", "NIST-800-53"]);
    }
}
