//! Entity resolver.
//!
//! One pass over the records: each record is classified by its subclass
//! assertions and, independently, its `contains*` properties are decoded.
//! Records never read each other, so the pass needs no forward-reference
//! handling; cross-entity links stay as strings for the consumer.
//!
//! A malformed `contains*` suffix aborts the run and no aggregate is
//! returned.

use crate::config::ResolverConfig;
use crate::contains;
use crate::entity::{ParticipantLink, Rhea};
use crate::error::ResolveError;
use crate::record::Record;
use crate::subclass;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Records per rayon task.
const PARALLEL_CHUNK: usize = 4096;

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(&self, records: &[Record]) -> Result<Rhea, ResolveError> {
        let rhea = if self.config.parallel {
            let partitions = records
                .par_chunks(PARALLEL_CHUNK)
                .map(|chunk| self.resolve_sequential(chunk))
                .collect::<Result<Vec<Rhea>, ResolveError>>()?;
            let mut rhea = Rhea::default();
            for partition in partitions {
                rhea.extend(partition);
            }
            rhea
        } else {
            self.resolve_sequential(records)?
        };

        tracing::debug!(
            records = records.len(),
            reactions = rhea.reactions.len(),
            compounds = rhea.compounds.len(),
            reactive_parts = rhea.reactive_parts.len(),
            reaction_sides = rhea.reaction_sides.len(),
            participants = rhea.participants.len(),
            parallel = self.config.parallel,
            "resolved rhea records"
        );
        Ok(rhea)
    }

    fn resolve_sequential(&self, records: &[Record]) -> Result<Rhea, ResolveError> {
        let mut rhea = Rhea::default();
        for record in records {
            self.resolve_record(record, &mut rhea)?;
        }
        Ok(rhea)
    }

    /// Append everything one record contributes to `out`.
    pub fn resolve_record(&self, record: &Record, out: &mut Rhea) -> Result<(), ResolveError> {
        subclass::classify(&self.config, record, out);
        contains::decode_record(record, out)?;
        if !record.compound.is_empty() {
            out.participants.push(ParticipantLink {
                participant: record.about.clone(),
                compound: record.compound.clone(),
            });
        }
        Ok(())
    }
}

/// Resolve with the default configuration.
pub fn resolve(records: &[Record]) -> Result<Rhea, ResolveError> {
    Resolver::default().resolve(records)
}

/// Count subclass values that select no entity kind and are not ChEBI parents.
///
/// The resolver drops these silently; this report is for callers that want
/// to notice new kinds appearing in the dump.
pub fn unrecognized_subclasses(
    records: &[Record],
    config: &ResolverConfig,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        for iri in &record.subclass_of {
            if subclass::lookup(config, iri).is_some()
                || iri.contains(config.chebi_marker.as_str())
            {
                continue;
            }
            *counts.entry(iri.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::CompoundKind;

    const NS: &str = "http://rdf.rhea-db.org/";

    fn reaction_record() -> Record {
        Record::new(format!("{NS}10000"))
            .with_id(10000)
            .with_accession("RX:1")
            .with_equation("a + b = c")
            .with_subclass(format!("{NS}DirectionalReaction"))
    }

    fn molecule_record() -> Record {
        Record::new(format!("{NS}Compound_1"))
            .with_accession("CMP:1")
            .with_chebi("CHEBI:100")
            .with_subclass(format!("{NS}SmallMolecule"))
    }

    #[test]
    fn resolves_reaction_and_small_molecule() {
        let rhea = resolve(&[reaction_record(), molecule_record()]).unwrap();

        assert_eq!(rhea.reactions.len(), 1);
        assert_eq!(rhea.reactions[0].accession, "RX:1");
        assert!(rhea.reactions[0].directional);
        assert_eq!(rhea.reactions[0].equation, "a + b = c");

        assert_eq!(rhea.compounds.len(), 1);
        assert_eq!(rhea.compounds[0].accession, "CMP:1");
        assert_eq!(rhea.compounds[0].kind, CompoundKind::SmallMolecule);

        assert_eq!(rhea.reactive_parts.len(), 1);
        assert_eq!(rhea.reactive_parts[0].chebi, "CHEBI:100");
        assert!(rhea.reaction_sides.is_empty());
    }

    #[test]
    fn contains_property_resolves_to_side() {
        let side = Record::new(format!("{NS}10000_L")).with_property("contains5", "CMP:9");
        let rhea = resolve(&[side]).unwrap();

        assert_eq!(rhea.reaction_sides.len(), 1);
        let side = &rhea.reaction_sides[0];
        assert_eq!(side.multiplicity, 5);
        assert!(!side.indefinite);
        assert_eq!(side.compound, "CMP:9");
    }

    #[test]
    fn malformed_suffix_returns_no_aggregate() {
        let records = vec![
            reaction_record(),
            Record::new("bad").with_property("containsXYZ", "CMP:1"),
            molecule_record(),
        ];
        assert!(resolve(&records).is_err());
    }

    #[test]
    fn participant_records_yield_links() {
        let participant = Record::new(format!("{NS}Participant_10000_compound_1283"))
            .with_compound(format!("{NS}Compound_1283"));
        let rhea = resolve(&[participant]).unwrap();

        assert_eq!(rhea.participants.len(), 1);
        assert_eq!(rhea.participants[0].compound, format!("{NS}Compound_1283"));
    }

    #[test]
    fn resolving_twice_is_identical() {
        let records = vec![
            reaction_record(),
            molecule_record(),
            Record::new("side").with_property("contains2", "p"),
        ];
        assert_eq!(resolve(&records).unwrap(), resolve(&records).unwrap());
    }

    #[test]
    fn parallel_matches_sequential() {
        let records: Vec<Record> = (0..10_000)
            .map(|i| match i % 3 {
                0 => reaction_record().with_id(i),
                1 => molecule_record().with_id(i),
                _ => Record::new(format!("side{i}")).with_property("contains1", "p"),
            })
            .collect();

        let sequential = resolve(&records).unwrap();
        let parallel = Resolver::new(ResolverConfig::default().with_parallel(true))
            .resolve(&records)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn parallel_propagates_errors() {
        let mut records: Vec<Record> = (0..9_000).map(|_| molecule_record()).collect();
        records.push(Record::new("bad").with_property("containsQ", "p"));

        let resolver = Resolver::new(ResolverConfig::default().with_parallel(true));
        assert!(resolver.resolve(&records).is_err());
    }

    #[test]
    fn reports_unrecognized_subclasses() {
        let records = vec![
            molecule_record().with_subclass(format!("{NS}Compound")),
            Record::new("x")
                .with_subclass(format!("{NS}Compound"))
                .with_subclass("http://purl.obolibrary.org/obo/CHEBI_1")
                .with_subclass(format!("{NS}NewKind")),
        ];
        let report = unrecognized_subclasses(&records, &ResolverConfig::default());

        assert_eq!(report.get(&format!("{NS}Compound")), Some(&2));
        assert_eq!(report.get(&format!("{NS}NewKind")), Some(&1));
        assert_eq!(report.len(), 2);
    }
}
