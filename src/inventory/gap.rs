//! Gap analysis: which required controls have no supporting claim.

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::load_for_certification;
use crate::config::Layout;
use crate::error::{ErrorList, Result};
use crate::models::claim::pair_key;
use crate::models::{ComponentSchema, Control};
use crate::sorting::natural_cmp;
use crate::workspace::Workspace;

/// Result of comparing a certification against a workspace.
#[derive(Debug)]
pub struct GapAnalysis {
    certification: String,
    missing_controls: HashMap<String, Control>,
    satisfied_by: HashMap<String, String>,
    load_errors: ErrorList,
}

/// Serializable summary of a [`GapAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapReport {
    pub certification: String,
    pub missing_count: usize,
    pub missing_controls: Vec<MissingControl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingControl {
    pub key: String,
    pub family: String,
    pub name: String,
}

/// Gap analysis for `certification` over the workspace at `root`.
pub fn compute_gap_analysis(certification: &str, root: &Path) -> Result<GapAnalysis> {
    compute_gap_analysis_with(certification, root, &Layout::default())
}

/// [`compute_gap_analysis`] with a custom directory layout.
pub fn compute_gap_analysis_with(
    certification: &str,
    root: &Path,
    layout: &Layout,
) -> Result<GapAnalysis> {
    let mut workspace = load_for_certification(certification, root, layout)?;
    let mut analysis = GapAnalysis::from_workspace(certification, &workspace);
    analysis.load_errors = workspace.take_load_errors();
    debug!(
        "Gap analysis for {}: {} missing",
        certification,
        analysis.missing_count()
    );
    Ok(analysis)
}

impl GapAnalysis {
    /// Compare the workspace's certification with its claims.
    ///
    /// Standards the workspace never loaded are skipped. A control missing
    /// from a loaded standard is reported with empty details.
    pub fn from_workspace(certification: &str, workspace: &Workspace) -> Self {
        let mut master = HashMap::new();
        if let Some(cert) = workspace.certification() {
            for (standard_key, control_key) in cert.required_pairs() {
                let Some(standard) = workspace.standard(standard_key) else {
                    continue;
                };
                let control = standard.control(control_key).cloned().unwrap_or_default();
                master.insert(pair_key(standard_key, control_key), control);
            }
        }

        // Components come back naturally sorted, so the first claimant is stable.
        let mut satisfied_by: HashMap<String, String> = HashMap::new();
        for component in workspace.components() {
            for claim in component.claims() {
                satisfied_by
                    .entry(claim.pair_key())
                    .or_insert_with(|| component.key().to_string());
            }
        }

        let missing_controls = master
            .into_iter()
            .filter(|(key, _)| !satisfied_by.contains_key(key))
            .collect();

        Self {
            certification: certification.to_string(),
            missing_controls,
            satisfied_by,
            load_errors: ErrorList::new(),
        }
    }

    pub fn certification(&self) -> &str {
        &self.certification
    }

    /// Missing `standard@control` keys mapped to their control details.
    pub fn missing_controls(&self) -> &HashMap<String, Control> {
        &self.missing_controls
    }

    pub fn missing_count(&self) -> usize {
        self.missing_controls.len()
    }

    /// Missing keys in natural order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.missing_controls.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| natural_cmp(a, b));
        keys
    }

    /// The first component that claimed `standard@control`, if any.
    pub fn satisfied_by(&self, pair: &str) -> Option<&str> {
        self.satisfied_by.get(pair).map(String::as_str)
    }

    /// Component and standard failures from the load.
    pub fn load_errors(&self) -> &ErrorList {
        &self.load_errors
    }

    pub fn report(&self) -> GapReport {
        GapReport {
            certification: self.certification.clone(),
            missing_count: self.missing_count(),
            missing_controls: self
                .sorted_keys()
                .into_iter()
                .map(|key| {
                    let control = &self.missing_controls[key];
                    MissingControl {
                        key: key.to_string(),
                        family: control.family.clone(),
                        name: control.name.clone(),
                    }
                })
                .collect(),
        }
    }
}
