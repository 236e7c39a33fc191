//! Masonry - compliance gap analysis over OpenControl workspaces.
//!
//! Masonry loads a directory of component, standard, and certification
//! descriptors into an in-memory workspace and reports which controls a
//! certification requires that no component claims to satisfy.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Workspace directory layout
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Gap analysis and implementation-status queries
//! - [`models`] - Components, claims, standards, and certifications
//! - [`schema`] - Component schema versions and the version resolver
//! - [`sorting`] - Natural ordering for control and component keys
//! - [`ui`] - Terminal output, tables, and a mock for tests
//! - [`workspace`] - Concurrent workspace loading and the justification index
//!
//! # Example
//!
//! ```
//! use masonry::schema::parse_component;
//! use masonry::models::ComponentSchema;
//! use std::path::Path;
//!
//! let yaml = br#"
//! schema_version: 3.1.0
//! name: Amazon EC2
//! key: ec2
//! satisfies:
//!   - standard_key: NIST-800-53
//!     control_key: CM-2
//! "#;
//! let component = parse_component(yaml, Path::new("component.yaml")).unwrap();
//! assert_eq!(component.key(), "ec2");
//! assert_eq!(component.claims()[0].pair_key(), "NIST-800-53@CM-2");
//! ```
//!
//! For workspace loading and gap analysis, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod schema;
pub mod sorting;
pub mod ui;
pub mod workspace;

pub use error::{ErrorList, MasonryError, Result};
