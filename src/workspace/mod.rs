//! The in-memory compliance workspace.
//!
//! A [`Workspace`] owns every component, standard, and the certification
//! loaded from one directory tree, plus the [`JustificationIndex`] built from
//! component claims. It is filled once by [`WorkspaceLoader`] and read-only
//! afterwards, so queries are safe from any number of threads.
//!
//! # Example
//!
//! ```no_run
//! use masonry::workspace::Workspace;
//! use std::path::Path;
//!
//! let root = Path::new("opencontrols");
//! let ws = Workspace::load_data(root, &root.join("certifications/LATO.yaml"))?;
//! for v in ws.all_verifications_with("NIST-800-53", "AC-2").unwrap_or_default() {
//!     println!("{} covers AC-2", v.component_key);
//! }
//! # Ok::<(), masonry::error::MasonryError>(())
//! ```

pub mod fs;
pub mod justifications;
pub mod loader;
pub mod maps;

pub use fs::{DirEntryInfo, FileSystem, LocalFileSystem};
pub use justifications::{JustificationIndex, Verification};
pub use loader::{read_certification, WorkspaceLoader};
pub use maps::{ComponentMap, StandardMap};

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ErrorList, Result};
use crate::models::{Certification, ComponentSchema, CoveredBy, Standard, VersionedComponent};

/// Components, standards, a certification, and the claims index.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    components: ComponentMap,
    standards: StandardMap,
    justifications: JustificationIndex,
    certification: Option<Certification>,
    load_errors: ErrorList,
}

/// A `covered_by` entry that points at nothing in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Component that made the claim.
    pub owner: String,
    pub standard_key: String,
    pub control_key: String,
    pub covered_by: CoveredBy,
    /// True when the referenced component itself is missing.
    pub missing_component: bool,
}

impl Workspace {
    fn empty(root: PathBuf) -> Self {
        Self {
            root,
            components: ComponentMap::new(),
            standards: StandardMap::new(),
            justifications: JustificationIndex::new(),
            certification: None,
            load_errors: ErrorList::new(),
        }
    }

    /// Load `root` with the default layout and the given certification file.
    pub fn load_data(root: &Path, certification_path: &Path) -> Result<Self> {
        WorkspaceLoader::new(root)
            .certification(certification_path)
            .load()
    }

    /// Directory the workspace was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn component(&self, key: &str) -> Option<Arc<VersionedComponent>> {
        self.components.get(key)
    }

    /// Every component, naturally sorted by key.
    pub fn components(&self) -> Vec<Arc<VersionedComponent>> {
        self.components.sorted()
    }

    pub fn standard(&self, key: &str) -> Option<Arc<Standard>> {
        self.standards.get(key)
    }

    /// Every standard, naturally sorted by name.
    pub fn standards(&self) -> Vec<Arc<Standard>> {
        self.standards.sorted()
    }

    pub fn certification(&self) -> Option<&Certification> {
        self.certification.as_ref()
    }

    pub fn justifications(&self) -> &JustificationIndex {
        &self.justifications
    }

    /// Claims on a standard/control pair, or `None` when nothing claims it.
    pub fn all_verifications_with(
        &self,
        standard_key: &str,
        control_key: &str,
    ) -> Option<Vec<Verification>> {
        let verifications = self.justifications.get(standard_key, control_key);
        (!verifications.is_empty()).then_some(verifications)
    }

    /// Component and standard failures collected during load.
    pub fn load_errors(&self) -> &ErrorList {
        &self.load_errors
    }

    /// Move the collected load failures out, leaving an empty list.
    pub fn take_load_errors(&mut self) -> ErrorList {
        std::mem::take(&mut self.load_errors)
    }

    /// Every `covered_by` entry whose component or verification key does
    /// not resolve, ordered by owning component then document order.
    pub fn unresolved_covered_by(&self) -> Vec<UnresolvedReference> {
        let mut unresolved = Vec::new();
        for component in self.components() {
            let owner = component.key();
            for claim in component.claims() {
                for covered in &claim.covered_by {
                    let target = covered.resolved_component(owner);
                    let missing_component = match self.components.get(target) {
                        Some(target) => {
                            if target.verification(&covered.verification_key).is_some() {
                                continue;
                            }
                            false
                        }
                        None => true,
                    };
                    unresolved.push(UnresolvedReference {
                        owner: owner.to_string(),
                        standard_key: claim.standard_key.clone(),
                        control_key: claim.control_key.clone(),
                        covered_by: covered.clone(),
                        missing_component,
                    });
                }
            }
        }
        unresolved
    }
}
