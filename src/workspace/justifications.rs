//! The justification index: which components claim each standard/control pair.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Claim, ComponentSchema};

/// One component's claim on a standard/control pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    pub component_key: String,
    pub claim: Arc<Claim>,
}

type Buckets = HashMap<String, HashMap<String, Vec<Verification>>>;

/// `standard -> control -> [Verification]`, safe to fill from many threads.
///
/// Buckets keep insertion order.
#[derive(Debug, Default)]
pub struct JustificationIndex {
    mapping: Mutex<Buckets>,
}

impl JustificationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one verification to its bucket, creating the bucket if needed.
    pub fn add(
        &self,
        standard_key: &str,
        control_key: &str,
        component_key: &str,
        claim: Arc<Claim>,
    ) {
        self.mapping
            .lock()
            .entry(standard_key.to_string())
            .or_default()
            .entry(control_key.to_string())
            .or_default()
            .push(Verification {
                component_key: component_key.to_string(),
                claim,
            });
    }

    /// Index every claim of `component`, in document order, under one lock.
    pub fn load_mappings<C: ComponentSchema + ?Sized>(&self, component: &C) {
        let component_key = component.key();
        let claims = component.claims();
        let mut mapping = self.mapping.lock();
        for claim in claims {
            let bucket = mapping
                .entry(claim.standard_key.clone())
                .or_default()
                .entry(claim.control_key.clone())
                .or_default();
            bucket.push(Verification {
                component_key: component_key.to_string(),
                claim: Arc::new(claim),
            });
        }
    }

    /// A snapshot of one bucket. Empty when nothing claims the pair.
    pub fn get(&self, standard_key: &str, control_key: &str) -> Vec<Verification> {
        self.get_and_apply(standard_key, control_key, <[Verification]>::to_vec)
    }

    /// Run `f` on one bucket while holding the index lock.
    ///
    /// `f` sees an empty slice when nothing claims the pair. It must not call
    /// back into the index.
    pub fn get_and_apply<R>(
        &self,
        standard_key: &str,
        control_key: &str,
        f: impl FnOnce(&[Verification]) -> R,
    ) -> R {
        let mapping = self.mapping.lock();
        let bucket = mapping
            .get(standard_key)
            .and_then(|controls| controls.get(control_key))
            .map(Vec::as_slice)
            .unwrap_or_default();
        f(bucket)
    }

    /// Number of distinct standard/control pairs with at least one claim.
    pub fn len(&self) -> usize {
        self.mapping.lock().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total verifications across all buckets.
    pub fn total(&self) -> usize {
        self.mapping
            .lock()
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }
}
