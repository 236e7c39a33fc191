//! Questions asked of a workspace loaded for one certification.
//!
//! - [`resolve`] - certification name to file path
//! - [`gap`] - required controls that no component claims
//! - [`status`] - claims with a given implementation status
//!
//! Every query resolves and parses the certification first and fails fast
//! on a bad name or an unparsable file. Component and standard load failures
//! do not stop a query; they travel with its result.

pub mod gap;
pub mod resolve;
pub mod status;

pub use gap::{compute_gap_analysis, compute_gap_analysis_with, GapAnalysis, GapReport};
pub use resolve::resolve_certification;
pub use status::{
    find_implementation_status, find_implementation_status_with, StatusMatch, StatusReport,
};

use std::path::Path;

use crate::config::Layout;
use crate::error::{MasonryError, Result};
use crate::workspace::{read_certification, Workspace, WorkspaceLoader};

/// Resolve `certification`, load the workspace, and require that something
/// usable came back.
fn load_for_certification(certification: &str, root: &Path, layout: &Layout) -> Result<Workspace> {
    let path = resolve_certification(root, certification, layout)?;
    // A bad certification stops the query before any component is read.
    let parsed = read_certification(&path)?;
    let workspace = WorkspaceLoader::new(root)
        .layout(layout.clone())
        .with_certification(parsed)
        .load()?;

    if workspace.certification().is_none() || workspace.components().is_empty() {
        return Err(MasonryError::WorkspaceEmpty {
            root: root.to_path_buf(),
            certification: certification.to_string(),
        });
    }
    Ok(workspace)
}
