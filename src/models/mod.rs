//! Typed representations of workspace descriptors.
//!
//! - [`component`] - versioned component schemas behind one capability trait
//! - [`claim`] - the normalized view of a component's `satisfies` entries
//! - [`references`] - general, verification, and covered-by references
//! - [`standard`] - control catalogs
//! - [`certification`] - required standard/control subsets
//!
//! Descriptors are hand-written YAML, so decoding is lenient where the
//! format historically was: explicit `null` reads as empty, and identifier
//! fields accept bare numbers (`control_key: 1.1`).

pub mod certification;
pub mod claim;
pub mod component;
pub mod references;
pub mod standard;

pub use certification::Certification;
pub use claim::{Claim, SatisfiesSchema, Section};
pub use component::{ComponentSchema, VersionedComponent};
pub use references::{CoveredBy, GeneralReference, VerificationReference};
pub use standard::{Control, Standard};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a YAML scalar (string, number, bool, or null) as a string.
pub(crate) fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    scalar_to_string(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a scalar identifier, found {:?}", value))
    })
}

/// Render a scalar YAML value as a key string.
pub(crate) fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}
