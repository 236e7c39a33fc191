//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`masonry diff`, `masonry list`)
//! - Workspace paths resolved in one place
//! - Consistent handling of partial load failures

pub mod completions;
pub mod diff;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// A small workspace shared by the command tests.
///
/// `LATO` requires four NIST-800-53 controls. `ec2` claims CM-2 and AC-3,
/// `legacy` claims an unrelated AU-1, so AC-2 and AC-12 are missing.
#[cfg(test)]
pub(crate) fn test_workspace() -> tempfile::TempDir {
    use std::fs;

    const EC2: &str = r#"
schema_version: 3.1.0
name: EC2
key: ec2
verifications:
  - key: scan
    name: Nightly scan
satisfies:
  - standard_key: NIST-800-53
    control_key: CM-2
    implementation_status: partial
    covered_by:
      - verification_key: scan
      - component_key: s3
        verification_key: audit
  - standard_key: NIST-800-53
    control_key: AC-3
    implementation_status: complete
"#;

    const LEGACY: &str = r#"
schema_version: 2.0
name: Legacy
satisfies:
  - standard_key: NIST-800-53
    control_key: AU-1
    narrative: Logs are kept
    implementation_status: partial
"#;

    const NIST: &str = r#"
name: NIST-800-53
AC-2:
  family: AC
  name: Account Management
AC-3:
  family: AC
  name: Access Enforcement
AC-12:
  family: AC
  name: Session Termination
CM-2:
  family: CM
  name: Baseline Configuration
"#;

    const LATO: &str = r#"
name: LATO
standards:
  NIST-800-53:
    AC-2:
    AC-3:
    AC-12:
    CM-2:
"#;

    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    for (rel, content) in [
        ("components/ec2/component.yaml", EC2),
        ("components/legacy/component.yaml", LEGACY),
        ("standards/NIST-800-53.yaml", NIST),
        ("certifications/LATO.yaml", LATO),
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}
