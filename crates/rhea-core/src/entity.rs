//! Resolved entities.
//!
//! Entities never point at each other. Every link is a string (an
//! `about` IRI or an accession) that the consumer resolves, e.g. through
//! [`crate::index::RheaIndex`]. Nothing here guarantees the target exists.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: i64,
    pub directional: bool,
    pub accession: String,
    pub status: String,
    pub comment: String,
    pub equation: String,
    pub html_equation: String,
    pub is_chemically_balanced: bool,
    pub is_transport: bool,
    pub ec: String,
    pub location: String,
    pub citations: Vec<String>,
    pub substrates: Vec<String>,
    pub products: Vec<String>,
    pub substrates_or_products: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompoundKind {
    SmallMolecule,
    Polymer,
    GenericPolypeptide,
    GenericPolynucleotide,
    GenericHeteropolysaccharide,
}

impl CompoundKind {
    pub const ALL: [CompoundKind; 5] = [
        CompoundKind::SmallMolecule,
        CompoundKind::Polymer,
        CompoundKind::GenericPolypeptide,
        CompoundKind::GenericPolynucleotide,
        CompoundKind::GenericHeteropolysaccharide,
    ];

    /// Local name used in the `subClassOf` IRI.
    pub fn as_str(self) -> &'static str {
        match self {
            CompoundKind::SmallMolecule => "SmallMolecule",
            CompoundKind::Polymer => "Polymer",
            CompoundKind::GenericPolypeptide => "GenericPolypeptide",
            CompoundKind::GenericPolynucleotide => "GenericPolynucleotide",
            CompoundKind::GenericHeteropolysaccharide => "GenericHeteropolysaccharide",
        }
    }

    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Generic compounds get their reactive part from a separate record.
    pub fn is_generic(self) -> bool {
        matches!(
            self,
            CompoundKind::GenericPolypeptide
                | CompoundKind::GenericPolynucleotide
                | CompoundKind::GenericHeteropolysaccharide
        )
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compound {
    pub id: i64,
    pub about: String,
    pub accession: String,
    pub name: String,
    pub html_name: String,
    pub kind: CompoundKind,
    /// Accession of the reactive part for simple kinds, the explicit
    /// `reactivePart` IRI for generic kinds.
    pub reactive_part: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactivePart {
    pub id: i64,
    pub about: String,
    pub accession: String,
    pub position: String,
    pub name: String,
    pub html_name: String,
    pub formula: String,
    pub charge: String,
    /// Underlying ChEBI entry for polymers, the direct one otherwise.
    pub chebi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass_of_chebi: Option<String>,
    pub polymerization_index: String,
}

/// One `contains*` membership of a compound in a reaction side.
///
/// `minus` and `plus` are only ever set together with `indefinite`, and
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSide {
    pub accession: String,
    pub multiplicity: i64,
    pub indefinite: bool,
    pub minus: bool,
    pub plus: bool,
    pub compound: String,
}

/// A participant record's pointer at its compound (`rh:compound`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantLink {
    pub participant: String,
    pub compound: String,
}

/// Output aggregate of one resolver run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rhea {
    pub reactions: Vec<Reaction>,
    pub compounds: Vec<Compound>,
    pub reactive_parts: Vec<ReactivePart>,
    pub reaction_sides: Vec<ReactionSide>,
    #[serde(default)]
    pub participants: Vec<ParticipantLink>,
}

impl Rhea {
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
            && self.compounds.is_empty()
            && self.reactive_parts.is_empty()
            && self.reaction_sides.is_empty()
            && self.participants.is_empty()
    }

    /// Append `other`'s collections after ours, keeping their order.
    pub fn extend(&mut self, other: Rhea) {
        self.reactions.extend(other.reactions);
        self.compounds.extend(other.compounds);
        self.reactive_parts.extend(other.reactive_parts);
        self.reaction_sides.extend(other.reaction_sides);
        self.participants.extend(other.participants);
    }
}
