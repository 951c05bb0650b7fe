//! Flat record model.
//!
//! A [`Record`] is one `rdf:Description` of the dump after decoding, before
//! it has been classified. The statically-known properties of the Rhea schema
//! get their own fields; everything else lands in [`Record::properties`], an
//! ordered bag of `(local-name, value)` pairs. The `contains1`, `contains2`,
//! `containsN`, ... family lives in that bag: its names are only known once
//! the document has been read.
//!
//! Fields that do not apply to a record's kind stay at their zero value and
//! must be ignored by consumers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub about: String,
    pub id: i64,
    pub accession: String,

    // Reaction
    pub equation: String,
    pub html_equation: String,
    pub is_chemically_balanced: bool,
    pub is_transport: bool,
    pub status: String,
    pub comment: String,
    pub ec: String,
    pub location: String,
    pub citations: Vec<String>,
    pub substrates: Vec<String>,
    pub products: Vec<String>,
    pub substrates_or_products: Vec<String>,

    pub subclass_of: Vec<String>,

    // Compound / reactive part
    pub name: String,
    pub html_name: String,
    pub formula: String,
    pub charge: String,
    pub chebi: String,
    pub underlying_chebi: String,
    pub reactive_part: String,
    pub position: String,
    pub polymerization_index: String,

    // Participant / reaction side
    pub compound: String,
    pub side: String,
    pub bidirectional_reactions: Vec<String>,
    pub directional_reactions: Vec<String>,
    pub see_also: String,
    pub transformable_to: String,
    pub curated_order: i64,
    pub contains: String,

    /// Properties without a dedicated field, in document order.
    pub properties: Vec<(String, String)>,
}

impl Record {
    pub fn new(about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_accession(mut self, accession: impl Into<String>) -> Self {
        self.accession = accession.into();
        self
    }

    pub fn with_subclass(mut self, subclass: impl Into<String>) -> Self {
        self.subclass_of.push(subclass.into());
        self
    }

    pub fn with_equation(mut self, equation: impl Into<String>) -> Self {
        self.equation = equation.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_chebi(mut self, chebi: impl Into<String>) -> Self {
        self.chebi = chebi.into();
        self
    }

    pub fn with_underlying_chebi(mut self, chebi: impl Into<String>) -> Self {
        self.underlying_chebi = chebi.into();
        self
    }

    pub fn with_reactive_part(mut self, reference: impl Into<String>) -> Self {
        self.reactive_part = reference.into();
        self
    }

    pub fn with_compound(mut self, reference: impl Into<String>) -> Self {
        self.compound = reference.into();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Bag entries whose name starts with `prefix`.
    pub fn properties_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.properties
            .iter()
            .filter(move |(name, _)| name.starts_with(prefix))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
