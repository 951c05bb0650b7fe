//! Resolver configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const RHEA_NAMESPACE: &str = "http://rdf.rhea-db.org/";
pub const CHEBI_MARKER: &str = "CHEBI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix of the known type IRIs (`<namespace>SmallMolecule`, ...).
    pub namespace: String,
    /// Substring identifying a ChEBI parent class among `subClassOf` values.
    pub chebi_marker: String,
    /// Resolve record partitions on the rayon pool.
    pub parallel: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            namespace: RHEA_NAMESPACE.to_string(),
            chebi_marker: CHEBI_MARKER.to_string(),
            parallel: false,
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Full IRI for a type local name in the configured namespace.
    pub fn type_iri(&self, local_name: &str) -> String {
        format!("{}{}", self.namespace, local_name)
    }
}
