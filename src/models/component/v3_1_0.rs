//! Component schema 3.1.0.
//!
//! Same shape as 3.0.0 plus multi-valued `control_origins` and
//! `implementation_statuses`. The plural accessors report the union of the
//! list and its singular counterpart.

use serde::{Deserialize, Serialize};

use crate::models::claim::{merge_values, SatisfiesSchema, Section};
use crate::models::references::{CoveredBy, GeneralReference, VerificationReference};
use crate::models::{null_as_default, scalar_as_string, Claim};
use crate::schema::SchemaVersion;

use super::ComponentSchema;

pub const VERSION: SchemaVersion = SchemaVersion::new(3, 1, 0);

/// A 3.1.0 component descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<GeneralReference>,
    #[serde(deserialize_with = "null_as_default")]
    pub verifications: Vec<VerificationReference>,
    #[serde(deserialize_with = "null_as_default")]
    pub satisfies: Vec<Satisfies>,
    #[serde(deserialize_with = "null_as_default")]
    pub responsible_role: String,
}

/// A 3.1.0 `satisfies` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Satisfies {
    #[serde(deserialize_with = "scalar_as_string")]
    pub standard_key: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub control_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub narrative: Vec<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub covered_by: Vec<CoveredBy>,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub control_origin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub control_origins: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub implementation_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub implementation_statuses: Vec<String>,
}

impl ComponentSchema for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: String) {
        self.key = key;
    }

    fn references(&self) -> &[GeneralReference] {
        &self.references
    }

    fn verifications(&self) -> &[VerificationReference] {
        &self.verifications
    }

    fn claims(&self) -> Vec<Claim> {
        self.satisfies.iter().map(SatisfiesSchema::to_claim).collect()
    }

    fn responsible_role(&self) -> &str {
        &self.responsible_role
    }

    fn version(&self) -> SchemaVersion {
        VERSION
    }
}

impl SatisfiesSchema for Satisfies {
    fn standard_key(&self) -> &str {
        &self.standard_key
    }

    fn control_key(&self) -> &str {
        &self.control_key
    }

    fn narratives(&self) -> Vec<Section> {
        self.narrative.clone()
    }

    fn parameters(&self) -> Vec<Section> {
        self.parameters.clone()
    }

    fn covered_by(&self) -> &[CoveredBy] {
        &self.covered_by
    }

    fn control_origin(&self) -> &str {
        &self.control_origin
    }

    fn control_origins(&self) -> Vec<String> {
        merge_values(&self.control_origins, &self.control_origin)
    }

    fn implementation_status(&self) -> &str {
        &self.implementation_status
    }

    fn implementation_statuses(&self) -> Vec<String> {
        merge_values(&self.implementation_statuses, &self.implementation_status)
    }
}
