//! Component descriptors across schema generations.
//!
//! Every supported generation decodes into its own struct, and
//! [`VersionedComponent`] wraps them behind the [`ComponentSchema`]
//! capability trait. Code outside this module never inspects the variant.

pub mod v2_0_0;
pub mod v3_0_0;
pub mod v3_1_0;

use serde::Serialize;

use super::claim::Claim;
use super::references::{find_verification, GeneralReference, VerificationReference};
use crate::schema::SchemaVersion;

/// Capabilities shared by every component generation.
pub trait ComponentSchema {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Unique key within a workspace.
    fn key(&self) -> &str;

    /// Override the key (used when the descriptor omits one).
    fn set_key(&mut self, key: String);

    /// General references.
    fn references(&self) -> &[GeneralReference];

    /// Verification references, addressable by key.
    fn verifications(&self) -> &[VerificationReference];

    /// Normalized claims, one per `satisfies` entry, in document order.
    fn claims(&self) -> Vec<Claim>;

    /// Role responsible for the component. Empty before 3.0.0.
    fn responsible_role(&self) -> &str;

    /// The schema version the descriptor was decoded with.
    fn version(&self) -> SchemaVersion;

    /// Find a verification by key.
    fn verification(&self, key: &str) -> Option<&VerificationReference> {
        find_verification(self.verifications(), key)
    }
}

/// A decoded component of any supported schema generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VersionedComponent {
    V2_0_0(v2_0_0::Component),
    V3_0_0(v3_0_0::Component),
    V3_1_0(v3_1_0::Component),
}

impl VersionedComponent {
    fn inner(&self) -> &dyn ComponentSchema {
        match self {
            Self::V2_0_0(c) => c,
            Self::V3_0_0(c) => c,
            Self::V3_1_0(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ComponentSchema {
        match self {
            Self::V2_0_0(c) => c,
            Self::V3_0_0(c) => c,
            Self::V3_1_0(c) => c,
        }
    }
}

impl ComponentSchema for VersionedComponent {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn key(&self) -> &str {
        self.inner().key()
    }

    fn set_key(&mut self, key: String) {
        self.inner_mut().set_key(key);
    }

    fn references(&self) -> &[GeneralReference] {
        self.inner().references()
    }

    fn verifications(&self) -> &[VerificationReference] {
        self.inner().verifications()
    }

    fn claims(&self) -> Vec<Claim> {
        self.inner().claims()
    }

    fn responsible_role(&self) -> &str {
        self.inner().responsible_role()
    }

    fn version(&self) -> SchemaVersion {
        self.inner().version()
    }
}

impl From<v2_0_0::Component> for VersionedComponent {
    fn from(c: v2_0_0::Component) -> Self {
        Self::V2_0_0(c)
    }
}

impl From<v3_0_0::Component> for VersionedComponent {
    fn from(c: v3_0_0::Component) -> Self {
        Self::V3_0_0(c)
    }
}

impl From<v3_1_0::Component> for VersionedComponent {
    fn from(c: v3_1_0::Component) -> Self {
        Self::V3_1_0(c)
    }
}
