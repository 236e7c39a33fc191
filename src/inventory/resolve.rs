//! Map a certification name to its file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Layout;
use crate::error::{MasonryError, Result};
use crate::sorting::sort_natural;

/// Path of the certification file for `name` under `root`.
///
/// Fails with [`MasonryError::MissingCertificationArgument`] for an empty
/// name. When the file is absent, fails with
/// [`MasonryError::CertificationNotFound`] listing the certifications that do
/// exist, or [`MasonryError::CertificationDirectoryMissing`] when there is no
/// certifications directory to list.
pub fn resolve_certification(root: &Path, name: &str, layout: &Layout) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(MasonryError::MissingCertificationArgument);
    }

    let path = layout.certification_file(root, name);
    if path.is_file() {
        debug!("Resolved certification {} to {}", name, path.display());
        return Ok(path);
    }

    let dir = layout.certifications_dir(root);
    let entries = fs::read_dir(&dir)
        .map_err(|_| MasonryError::CertificationDirectoryMissing { path: dir.clone() })?;

    let mut alternatives: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    sort_natural(&mut alternatives);

    Err(MasonryError::CertificationNotFound { path, alternatives })
}
