//! Consumer-side lookup over a resolved [`Rhea`].
//!
//! The resolver leaves every link as a string. This index turns those
//! strings back into entities when a caller wants a linked view: generic
//! compounds to their standalone reactive parts, reaction sides to
//! compounds through participant records, and so on. First occurrence wins
//! for duplicate keys; duplicates are reported, never merged.

use crate::entity::{Compound, ParticipantLink, ReactivePart, Reaction, ReactionSide, Rhea};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Reaction,
    Compound,
    ReactivePart,
}

#[derive(Debug, Default)]
pub struct RheaIndex<'a> {
    reactions: HashMap<&'a str, &'a Reaction>,
    compounds_by_about: HashMap<&'a str, &'a Compound>,
    compounds_by_accession: HashMap<&'a str, &'a Compound>,
    parts_by_about: HashMap<&'a str, &'a ReactivePart>,
    parts_by_accession: HashMap<&'a str, &'a ReactivePart>,
    participants: HashMap<&'a str, &'a ParticipantLink>,
    sides: HashMap<&'a str, Vec<&'a ReactionSide>>,
    duplicates: BTreeSet<(EntityKind, String)>,
}

impl<'a> RheaIndex<'a> {
    pub fn build(rhea: &'a Rhea) -> Self {
        let mut index = Self::default();

        for reaction in &rhea.reactions {
            if !insert_first(&mut index.reactions, &reaction.accession, reaction) {
                index
                    .duplicates
                    .insert((EntityKind::Reaction, reaction.accession.clone()));
            }
        }
        for compound in &rhea.compounds {
            insert_first(&mut index.compounds_by_about, &compound.about, compound);
            if !insert_first(&mut index.compounds_by_accession, &compound.accession, compound) {
                index
                    .duplicates
                    .insert((EntityKind::Compound, compound.accession.clone()));
            }
        }
        for part in &rhea.reactive_parts {
            insert_first(&mut index.parts_by_about, &part.about, part);
            if !insert_first(&mut index.parts_by_accession, &part.accession, part) {
                index
                    .duplicates
                    .insert((EntityKind::ReactivePart, part.accession.clone()));
            }
        }
        for link in &rhea.participants {
            insert_first(&mut index.participants, &link.participant, link);
        }
        for side in &rhea.reaction_sides {
            index
                .sides
                .entry(side.accession.as_str())
                .or_default()
                .push(side);
        }

        index
    }

    pub fn reaction(&self, accession: &str) -> Option<&'a Reaction> {
        self.reactions.get(accession).copied()
    }

    /// Compound by `about` IRI, falling back to accession.
    pub fn compound(&self, reference: &str) -> Option<&'a Compound> {
        self.compounds_by_about
            .get(reference)
            .or_else(|| self.compounds_by_accession.get(reference))
            .copied()
    }

    /// Reactive part by `about` IRI, falling back to accession.
    pub fn reactive_part(&self, reference: &str) -> Option<&'a ReactivePart> {
        self.parts_by_about
            .get(reference)
            .or_else(|| self.parts_by_accession.get(reference))
            .copied()
    }

    pub fn reactive_part_of(&self, compound: &Compound) -> Option<&'a ReactivePart> {
        if compound.kind.is_generic() {
            self.parts_by_about.get(compound.reactive_part.as_str()).copied()
        } else {
            self.parts_by_accession
                .get(compound.reactive_part.as_str())
                .copied()
        }
    }

    /// Follow a side's compound reference, through a participant link when
    /// it names one.
    pub fn compound_for_side(&self, side: &ReactionSide) -> Option<&'a Compound> {
        match self.participants.get(side.compound.as_str()) {
            Some(link) => self.compound(&link.compound),
            None => self.compound(&side.compound),
        }
    }

    pub fn sides(&self, side_about: &str) -> &[&'a ReactionSide] {
        self.sides
            .get(side_about)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn duplicate_accessions(&self) -> impl Iterator<Item = (EntityKind, &str)> + '_ {
        self.duplicates
            .iter()
            .map(|(kind, accession)| (*kind, accession.as_str()))
    }
}

/// Returns false when `key` was already present.
fn insert_first<'a, T>(map: &mut HashMap<&'a str, &'a T>, key: &'a str, value: &'a T) -> bool {
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::entity::CompoundKind;
    use crate::record::Record;
    use crate::resolve::Resolver;

    const NS: &str = "http://rdf.rhea-db.org/";

    fn sample() -> Rhea {
        let records = vec![
            Record::new(format!("{NS}Compound_1283"))
                .with_accession("CHEBI:15377")
                .with_chebi("http://purl.obolibrary.org/obo/CHEBI_15377")
                .with_subclass(format!("{NS}SmallMolecule")),
            Record::new(format!("{NS}Compound_10594"))
                .with_accession("GENERIC:9865")
                .with_reactive_part(format!("{NS}Compound_10594_rp2"))
                .with_subclass(format!("{NS}GenericPolypeptide")),
            Record::new(format!("{NS}Compound_10594_rp2"))
                .with_accession("GENERIC:9865_rp2")
                .with_subclass(format!("{NS}ReactivePart")),
            Record::new(format!("{NS}Participant_10000_compound_1283"))
                .with_compound(format!("{NS}Compound_1283")),
            Record::new(format!("{NS}10000_L"))
                .with_property("contains1", format!("{NS}Participant_10000_compound_1283"))
                .with_property("contains2", "GENERIC:9865"),
        ];
        Resolver::new(ResolverConfig::default())
            .resolve(&records)
            .unwrap()
    }

    #[test]
    fn links_simple_and_generic_compounds_to_parts() {
        let rhea = sample();
        let index = RheaIndex::build(&rhea);

        let water = index.compound("CHEBI:15377").unwrap();
        assert_eq!(water.kind, CompoundKind::SmallMolecule);
        assert_eq!(
            index.reactive_part_of(water).unwrap().about,
            format!("{NS}Compound_1283")
        );

        let generic = index.compound(&format!("{NS}Compound_10594")).unwrap();
        assert_eq!(
            index.reactive_part_of(generic).unwrap().accession,
            "GENERIC:9865_rp2"
        );
    }

    #[test]
    fn sides_resolve_through_participants_or_directly() {
        let rhea = sample();
        let index = RheaIndex::build(&rhea);

        let sides = index.sides(&format!("{NS}10000_L"));
        assert_eq!(sides.len(), 2);
        assert_eq!(
            index.compound_for_side(sides[0]).unwrap().accession,
            "CHEBI:15377"
        );
        assert_eq!(
            index.compound_for_side(sides[1]).unwrap().accession,
            "GENERIC:9865"
        );
        assert!(index.sides("missing").is_empty());
    }

    #[test]
    fn dangling_references_are_none() {
        let rhea = sample();
        let index = RheaIndex::build(&rhea);

        assert!(index.reaction("RHEA:1").is_none());
        assert!(index.compound("CHEBI:0").is_none());
        assert!(index.reactive_part("nope").is_none());
    }

    #[test]
    fn duplicates_keep_first_and_are_reported() {
        let reaction = |comment: &str| Reaction {
            accession: "RHEA:1".to_string(),
            comment: comment.to_string(),
            ..Reaction::default()
        };
        let rhea = Rhea {
            reactions: vec![reaction("first"), reaction("second")],
            ..Rhea::default()
        };
        let index = RheaIndex::build(&rhea);

        assert_eq!(index.reaction("RHEA:1").unwrap().comment, "first");
        let duplicates: Vec<_> = index.duplicate_accessions().collect();
        assert_eq!(duplicates, vec![(EntityKind::Reaction, "RHEA:1")]);
    }
}
