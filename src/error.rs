//! Error types for Masonry operations.
//!
//! This module defines [`MasonryError`], the primary error type used throughout
//! the crate, a [`Result`] type alias, and [`ErrorList`] for operations that
//! report every failure instead of stopping at the first one.
//!
//! # Error Handling Strategy
//!
//! - Per-item load failures (one component, one standard) are collected into an
//!   [`ErrorList`] so sibling loads still run
//! - Certification resolution and argument validation fail immediately
//! - Use `anyhow::Error` (via `MasonryError::Other`) for unexpected errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Masonry operations.
#[derive(Debug, Error)]
pub enum MasonryError {
    /// Descriptor has no `schema_version`, or its string value is not semver.
    #[error("Unable to find a valid schema_version in {file}")]
    MissingVersion { file: PathBuf },

    /// A numeric `schema_version` other than the grandfathered `2.0`.
    #[error("Version {value} is not in semver format in {file}")]
    VersionNotSemver { value: String, file: PathBuf },

    /// A well-formed version with no registered parser.
    #[error("Unsupported schema version {version} in {file}")]
    UnsupportedVersion { version: String, file: PathBuf },

    /// The descriptor could not be decoded into its schema.
    #[error("Unable to parse {file}: {message}")]
    MalformedDescriptor { file: PathBuf, message: String },

    /// Two components resolved to the same key.
    #[error("Component: {key} exists!")]
    DuplicateComponentKey { key: String },

    /// A component directory without a component descriptor.
    #[error("Component file {path} does not exist")]
    ComponentFileMissing { path: PathBuf },

    /// A directory listing failed.
    #[error("Error: Unable to read the directory {path}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file read failed.
    #[error("Error: Unable to read the file {path}")]
    ReadFileFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No certification name was given.
    #[error("Error: Missing Certification Argument")]
    MissingCertificationArgument,

    /// The certification file does not exist; lists the ones that do.
    #[error("Error: `{path}` does not exist\nUse one of the following:{}", format_alternatives(.alternatives))]
    CertificationNotFound {
        path: PathBuf,
        alternatives: Vec<String>,
    },

    /// The certifications directory itself is missing.
    #[error("Error: `{path}` directory does not exist")]
    CertificationDirectoryMissing { path: PathBuf },

    /// Nothing usable was loaded for the requested certification.
    #[error("Unable to load data in {root} for certification {certification}")]
    WorkspaceEmpty { root: PathBuf, certification: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_alternatives(alternatives: &[String]) -> String {
    alternatives.iter().map(|a| format!("\n{}", a)).collect()
}

/// Result type alias for Masonry operations.
pub type Result<T> = std::result::Result<T, MasonryError>;

/// Every failure from a multi-item operation, in the order they were collected.
///
/// Displays as one message per line.
#[derive(Debug, Default)]
pub struct ErrorList(Vec<MasonryError>);

impl ErrorList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one failure.
    pub fn push(&mut self, err: MasonryError) {
        self.0.push(err);
    }

    /// Append every failure from another list.
    pub fn extend(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    /// Number of collected failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the collected failures.
    pub fn iter(&self) -> std::slice::Iter<'_, MasonryError> {
        self.0.iter()
    }

    /// Consume the list, returning the underlying errors.
    pub fn into_inner(self) -> Vec<MasonryError> {
        self.0
    }
}

impl From<MasonryError> for ErrorList {
    fn from(err: MasonryError) -> Self {
        Self(vec![err])
    }
}

impl From<Vec<MasonryError>> for ErrorList {
    fn from(errs: Vec<MasonryError>) -> Self {
        Self(errs)
    }
}

impl IntoIterator for ErrorList {
    type Item = MasonryError;
    type IntoIter = std::vec::IntoIter<MasonryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}
