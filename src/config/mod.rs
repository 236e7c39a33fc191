//! Directory layout of an OpenControl workspace.
//!
//! The workspace root is populated by an external fetcher before Masonry
//! runs. Masonry only reads it:
//!
//! ```text
//! <root>/components/<key>/component.yaml
//! <root>/standards/<standard-name>.yaml
//! <root>/certifications/<certification-name>.yaml
//! ```
//!
//! # Example
//!
//! ```
//! use masonry::config::Layout;
//! use std::path::Path;
//!
//! let layout = Layout::default();
//! let root = Path::new("opencontrols");
//! assert_eq!(layout.components_dir(root), root.join("components"));
//! assert_eq!(
//!     layout.certification_file(root, "FedRAMP-low"),
//!     root.join("certifications").join("FedRAMP-low.yaml"),
//! );
//! ```

use std::path::{Path, PathBuf};

/// Default workspace root, relative to the current directory.
pub const DEFAULT_OPENCONTROL_DIR: &str = "opencontrols";

/// Environment variable consulted when `--opencontrol` is not given.
pub const OPENCONTROL_DIR_ENV: &str = "MASONRY_OPENCONTROL_DIR";

/// Folder and file names that make up a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Folder holding one subdirectory per component.
    pub components: String,
    /// Folder holding one file per standard.
    pub standards: String,
    /// Folder holding one file per certification.
    pub certifications: String,
    /// Descriptor file name inside each component directory.
    pub component_file: String,
    /// Extension (without the dot) of certification files.
    pub certification_extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            components: "components".to_string(),
            standards: "standards".to_string(),
            certifications: "certifications".to_string(),
            component_file: "component.yaml".to_string(),
            certification_extension: "yaml".to_string(),
        }
    }
}

impl Layout {
    /// `<root>/components`
    pub fn components_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.components)
    }

    /// `<root>/standards`
    pub fn standards_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.standards)
    }

    /// `<root>/certifications`
    pub fn certifications_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.certifications)
    }

    /// `<component_dir>/component.yaml`
    pub fn component_file(&self, component_dir: &Path) -> PathBuf {
        component_dir.join(&self.component_file)
    }

    /// `<root>/certifications/<name>.yaml`
    pub fn certification_file(&self, root: &Path, name: &str) -> PathBuf {
        self.certifications_dir(root)
            .join(format!("{}.{}", name, self.certification_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_convention() {
        let layout = Layout::default();
        let root = Path::new("/work/opencontrols");
        assert_eq!(
            layout.standards_dir(root),
            PathBuf::from("/work/opencontrols/standards")
        );
        assert_eq!(
            layout.certifications_dir(root),
            PathBuf::from("/work/opencontrols/certifications")
        );
        assert_eq!(
            layout.component_file(&layout.components_dir(root).join("ec2")),
            PathBuf::from("/work/opencontrols/components/ec2/component.yaml")
        );
    }

    #[test]
    fn custom_extension_is_used_for_certifications() {
        let layout = Layout {
            certification_extension: "yml".to_string(),
            ..Layout::default()
        };
        assert_eq!(
            layout.certification_file(Path::new("root"), "LATO"),
            PathBuf::from("root/certifications/LATO.yml")
        );
    }
}
