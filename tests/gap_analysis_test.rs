//! Integration tests for gap analysis and status queries.

use std::fs;
use std::path::Path;

use masonry::config::Layout;
use masonry::error::MasonryError;
use masonry::inventory::{
    compute_gap_analysis, compute_gap_analysis_with, find_implementation_status,
};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const NIST: &str = r#"
name: NIST-800-53
AC-2:
  family: AC
  name: Account Management
CM-2:
  family: CM
  name: Baseline Configuration
"#;

const LATO: &str = r#"
name: LATO
standards:
  NIST-800-53:
    AC-2:
    CM-2:
"#;

const EC2: &str = r#"
schema_version: 3.0.0
name: Amazon Elastic Compute Cloud
key: EC2
satisfies:
  - standard_key: NIST-800-53
    control_key: AC-2
    implementation_status: partial
"#;

fn scenario() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "standards/NIST-800-53.yaml", NIST);
    write(temp.path(), "certifications/LATO.yaml", LATO);
    write(temp.path(), "components/EC2/component.yaml", EC2);
    temp
}

#[test]
fn reports_the_unclaimed_control() {
    let temp = scenario();
    let analysis = compute_gap_analysis("LATO", temp.path()).unwrap();

    assert_eq!(analysis.missing_count(), 1);
    assert_eq!(analysis.sorted_keys(), ["NIST-800-53@CM-2"]);
    assert_eq!(
        analysis.missing_controls()["NIST-800-53@CM-2"].name,
        "Baseline Configuration"
    );
    assert_eq!(analysis.satisfied_by("NIST-800-53@AC-2"), Some("EC2"));
    assert!(analysis.load_errors().is_empty());
}

#[test]
fn empty_certification_name_is_rejected() {
    let temp = scenario();
    let err = compute_gap_analysis("", temp.path()).unwrap_err();
    assert!(matches!(err, MasonryError::MissingCertificationArgument));
    assert_eq!(err.to_string(), "Error: Missing Certification Argument");
}

#[test]
fn unknown_certification_lists_alternatives() {
    let temp = scenario();
    write(temp.path(), "certifications/FedRAMP-low.yaml", "name: FedRAMP-low\n");

    let err = compute_gap_analysis("FedRAMP", temp.path()).unwrap_err();
    let message = err.to_string();
    let tail = message.split_once('\n').map(|(_, tail)| tail).unwrap();
    insta::assert_snapshot!(tail, @r"
    Use one of the following:
    FedRAMP-low
    LATO
    ");
}

#[test]
fn repeated_runs_agree() {
    let temp = scenario();
    let first = compute_gap_analysis("LATO", temp.path()).unwrap().report();
    for _ in 0..5 {
        assert_eq!(compute_gap_analysis("LATO", temp.path()).unwrap().report(), first);
    }
}

#[test]
fn missing_keys_sort_naturally() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "standards/NIST-800-53.yaml", "name: NIST-800-53\n");
    write(
        temp.path(),
        "certifications/LATO.yaml",
        "name: LATO\nstandards:\n  NIST-800-53: [AC-12, AC-2, AC-1, CM-2]\n",
    );
    write(
        temp.path(),
        "components/noop/component.yaml",
        "schema_version: 3.1.0\nname: Noop\n",
    );

    let analysis = compute_gap_analysis("LATO", temp.path()).unwrap();
    insta::assert_snapshot!(analysis.sorted_keys().join("\n"), @r"
    NIST-800-53@AC-1
    NIST-800-53@AC-2
    NIST-800-53@AC-12
    NIST-800-53@CM-2
    ");
}

#[test]
fn broken_components_do_not_block_the_diff() {
    let temp = scenario();
    write(temp.path(), "components/bad/component.yaml", "schema_version: [nope]\n");
    fs::create_dir_all(temp.path().join("components/empty")).unwrap();

    let analysis = compute_gap_analysis("LATO", temp.path()).unwrap();
    assert_eq!(analysis.sorted_keys(), ["NIST-800-53@CM-2"]);
    assert_eq!(analysis.load_errors().len(), 2);
}

#[test]
fn unparsable_certification_stops_the_query() {
    let temp = scenario();
    write(temp.path(), "certifications/LATO.yaml", "name: LATO\nstandards: 42\n");
    write(temp.path(), "components/bad/component.yaml", "schema_version: [nope]\n");

    let err = compute_gap_analysis("LATO", temp.path()).unwrap_err();
    assert!(matches!(err, MasonryError::MalformedDescriptor { .. }), "{err}");
    assert!(err.to_string().contains("LATO.yaml"));
}

#[test]
fn workspace_without_components_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "standards/NIST-800-53.yaml", NIST);
    write(temp.path(), "certifications/LATO.yaml", LATO);

    let err = compute_gap_analysis("LATO", temp.path()).unwrap_err();
    assert!(matches!(err, MasonryError::WorkspaceEmpty { .. }));
}

#[test]
fn custom_layout() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "stds/NIST-800-53.yaml", NIST);
    write(temp.path(), "certs/LATO.yml", LATO);
    write(temp.path(), "parts/EC2/component.yaml", EC2);

    let layout = Layout {
        components: "parts".to_string(),
        standards: "stds".to_string(),
        certifications: "certs".to_string(),
        certification_extension: "yml".to_string(),
        ..Layout::default()
    };
    let analysis = compute_gap_analysis_with("LATO", temp.path(), &layout).unwrap();
    assert_eq!(analysis.sorted_keys(), ["NIST-800-53@CM-2"]);
}

#[test]
fn status_query_uses_component_names() {
    let temp = scenario();
    let report = find_implementation_status("LATO", temp.path(), "partial").unwrap();
    assert_eq!(
        report.sorted_keys(),
        ["Amazon Elastic Compute Cloud@AC-2"]
    );
}
