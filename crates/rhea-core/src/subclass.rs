//! Subclass classifier.
//!
//! Every `subClassOf` value of a record is looked up in a closed table of
//! Rhea type IRIs. A hit produces entities; a miss produces nothing. The
//! miss branch is part of the table's contract: the dump carries plenty of
//! `subClassOf` values (`rh:Compound`, ChEBI classes, ...) that do not name
//! an entity kind.

use crate::config::ResolverConfig;
use crate::entity::{Compound, CompoundKind, ReactivePart, Reaction, Rhea};
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubclassKind {
    Reaction { directional: bool },
    Compound(CompoundKind),
    ReactivePart,
}

/// Local names of the type IRIs that produce entities.
pub const KNOWN_SUBCLASSES: [(&str, SubclassKind); 8] = [
    (
        "DirectionalReaction",
        SubclassKind::Reaction { directional: true },
    ),
    (
        "BidirectionalReaction",
        SubclassKind::Reaction { directional: false },
    ),
    (
        "SmallMolecule",
        SubclassKind::Compound(CompoundKind::SmallMolecule),
    ),
    ("Polymer", SubclassKind::Compound(CompoundKind::Polymer)),
    (
        "GenericPolypeptide",
        SubclassKind::Compound(CompoundKind::GenericPolypeptide),
    ),
    (
        "GenericPolynucleotide",
        SubclassKind::Compound(CompoundKind::GenericPolynucleotide),
    ),
    (
        "GenericHeteropolysaccharide",
        SubclassKind::Compound(CompoundKind::GenericHeteropolysaccharide),
    ),
    ("ReactivePart", SubclassKind::ReactivePart),
];

/// Map one `subClassOf` IRI to an entity kind.
pub fn lookup(config: &ResolverConfig, iri: &str) -> Option<SubclassKind> {
    let local = iri.strip_prefix(config.namespace.as_str())?;
    KNOWN_SUBCLASSES
        .iter()
        .find(|(name, _)| *name == local)
        .map(|(_, kind)| *kind)
}

/// Last `subClassOf` value carrying the ChEBI marker, if any.
pub fn chebi_parent<'a>(config: &ResolverConfig, subclasses: &'a [String]) -> Option<&'a str> {
    subclasses
        .iter()
        .rev()
        .find(|iri| iri.contains(config.chebi_marker.as_str()))
        .map(String::as_str)
}

/// Append the entities selected by `record`'s subclass assertions to `out`.
///
/// Returns the number of entities produced.
pub fn classify(config: &ResolverConfig, record: &Record, out: &mut Rhea) -> usize {
    let mut produced = 0;
    for iri in &record.subclass_of {
        let Some(kind) = lookup(config, iri) else {
            tracing::trace!(about = %record.about, subclass = %iri, "ignoring subclass");
            continue;
        };
        match kind {
            SubclassKind::Reaction { directional } => {
                out.reactions.push(reaction(record, directional));
                produced += 1;
            }
            SubclassKind::Compound(kind) if kind.is_generic() => {
                out.compounds.push(compound(record, kind, &record.reactive_part));
                produced += 1;
            }
            SubclassKind::Compound(kind) => {
                out.compounds.push(compound(record, kind, &record.accession));
                let chebi = match kind {
                    CompoundKind::Polymer => &record.underlying_chebi,
                    _ => &record.chebi,
                };
                out.reactive_parts.push(reactive_part(config, record, chebi));
                produced += 2;
            }
            SubclassKind::ReactivePart => {
                out.reactive_parts
                    .push(reactive_part(config, record, &record.chebi));
                produced += 1;
            }
        }
    }
    produced
}

fn reaction(record: &Record, directional: bool) -> Reaction {
    Reaction {
        id: record.id,
        directional,
        accession: record.accession.clone(),
        status: record.status.clone(),
        comment: record.comment.clone(),
        equation: record.equation.clone(),
        html_equation: record.html_equation.clone(),
        is_chemically_balanced: record.is_chemically_balanced,
        is_transport: record.is_transport,
        ec: record.ec.clone(),
        location: record.location.clone(),
        citations: record.citations.clone(),
        substrates: record.substrates.clone(),
        products: record.products.clone(),
        substrates_or_products: record.substrates_or_products.clone(),
    }
}

fn compound(record: &Record, kind: CompoundKind, reactive_part: &str) -> Compound {
    Compound {
        id: record.id,
        about: record.about.clone(),
        accession: record.accession.clone(),
        name: record.name.clone(),
        html_name: record.html_name.clone(),
        kind,
        reactive_part: reactive_part.to_string(),
    }
}

fn reactive_part(config: &ResolverConfig, record: &Record, chebi: &str) -> ReactivePart {
    ReactivePart {
        id: record.id,
        about: record.about.clone(),
        accession: record.accession.clone(),
        position: record.position.clone(),
        name: record.name.clone(),
        html_name: record.html_name.clone(),
        formula: record.formula.clone(),
        charge: record.charge.clone(),
        chebi: chebi.to_string(),
        subclass_of_chebi: chebi_parent(config, &record.subclass_of).map(str::to_string),
        polymerization_index: record.polymerization_index.clone(),
    }
}
