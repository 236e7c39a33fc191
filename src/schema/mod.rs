//! Component schema versions and version dispatch.
//!
//! - [`version`] - the semantic version value carried by descriptors
//! - [`resolver`] - maps a descriptor's `schema_version` to its decoder

pub mod resolver;
pub mod version;

pub use resolver::{parse_component, ComponentParser, SchemaRegistry};
pub use version::{SchemaVersion, VersionParseError};
