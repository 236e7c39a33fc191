//! Find claims by implementation status.

use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use super::load_for_certification;
use crate::config::Layout;
use crate::error::{ErrorList, Result};
use crate::models::{Claim, ComponentSchema};
use crate::sorting::natural_cmp;

/// Claims whose implementation statuses include one value.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: String,
    /// Matches in natural key order, one per `component_name@control_key`.
    pub matches: Vec<StatusMatch>,
    #[serde(skip)]
    pub load_errors: ErrorList,
}

/// The first claim found for one `component_name@control_key`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMatch {
    pub key: String,
    pub claim: Claim,
}

impl StatusReport {
    /// Match keys in natural order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.key.as_str()).collect()
    }

    /// The claim recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&Claim> {
        self.matches.iter().find(|m| m.key == key).map(|m| &m.claim)
    }
}

/// Every claim in the workspace at `root` that lists `status`.
pub fn find_implementation_status(
    certification: &str,
    root: &Path,
    status: &str,
) -> Result<StatusReport> {
    find_implementation_status_with(certification, root, status, &Layout::default())
}

/// [`find_implementation_status`] with a custom directory layout.
pub fn find_implementation_status_with(
    certification: &str,
    root: &Path,
    status: &str,
    layout: &Layout,
) -> Result<StatusReport> {
    let mut workspace = load_for_certification(certification, root, layout)?;

    // Components come back naturally sorted, so first-wins is stable.
    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for component in workspace.components() {
        for claim in component.claims() {
            if !claim.has_implementation_status(status) {
                continue;
            }
            let key = format!("{}@{}", component.name(), claim.control_key);
            if seen.insert(key.clone()) {
                matches.push(StatusMatch { key, claim });
            }
        }
    }
    matches.sort_by(|a, b| natural_cmp(&a.key, &b.key));

    Ok(StatusReport {
        status: status.to_string(),
        matches,
        load_errors: workspace.take_load_errors(),
    })
}
