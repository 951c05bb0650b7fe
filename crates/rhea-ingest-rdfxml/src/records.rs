//! Statements → flat records.
//!
//! One [`Record`] per distinct subject, in first-seen order. Predicates are
//! matched on their local name; whatever is not a known Rhea property goes
//! into the record's open property bag.

use crate::error::DecodeError;
use crate::statements::{local_name, RdfStatement};
use rhea_core::Record;
use std::collections::HashMap;

pub fn records_from_statements(statements: Vec<RdfStatement>) -> Result<Vec<Record>, DecodeError> {
    let mut records: Vec<Record> = Vec::new();
    let mut by_subject: HashMap<String, usize> = HashMap::new();

    for statement in statements {
        let subject = statement.subject.text();
        let slot = match by_subject.get(&subject) {
            Some(&slot) => slot,
            None => {
                records.push(Record::new(subject.clone()));
                by_subject.insert(subject, records.len() - 1);
                records.len() - 1
            }
        };
        let name = local_name(&statement.predicate_iri).to_string();
        apply_property(&mut records[slot], &name, statement.object.into_text())?;
    }

    tracing::debug!(records = records.len(), "grouped statements into records");
    Ok(records)
}

fn apply_property(record: &mut Record, name: &str, value: String) -> Result<(), DecodeError> {
    match name {
        "id" => record.id = parse_int(record, "id", value)?,
        "accession" => record.accession = value,

        "equation" => record.equation = value,
        "htmlEquation" => record.html_equation = value,
        "isChemicallyBalanced" => {
            record.is_chemically_balanced = parse_bool(record, "isChemicallyBalanced", value)?
        }
        "isTransport" => record.is_transport = parse_bool(record, "isTransport", value)?,
        "status" => record.status = value,
        "comment" => record.comment = value,
        "ec" => record.ec = value,
        "location" => record.location = value,
        "citation" => record.citations.push(value),
        "substrates" => record.substrates.push(value),
        "products" => record.products.push(value),
        "substratesOrProducts" => record.substrates_or_products.push(value),

        "subClassOf" => record.subclass_of.push(value),

        "name" => record.name = value,
        "htmlName" => record.html_name = value,
        "formula" => record.formula = value,
        "charge" => record.charge = value,
        "chebi" => record.chebi = value,
        "underlyingChebi" => record.underlying_chebi = value,
        "reactivePart" => record.reactive_part = value,
        "position" => record.position = value,
        "polymerizationIndex" => record.polymerization_index = value,

        "compound" => record.compound = value,
        "side" => record.side = value,
        "bidirectionalReaction" => record.bidirectional_reactions.push(value),
        "directionalReaction" => record.directional_reactions.push(value),
        "seeAlso" => record.see_also = value,
        "transformableTo" => record.transformable_to = value,
        "curatedOrder" => record.curated_order = parse_int(record, "curatedOrder", value)?,
        "contains" => record.contains = value,

        _ => record.properties.push((name.to_string(), value)),
    }
    Ok(())
}

fn parse_int(record: &Record, field: &'static str, value: String) -> Result<i64, DecodeError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(record, field, value))
}

fn parse_bool(record: &Record, field: &'static str, value: String) -> Result<bool, DecodeError> {
    let parsed = match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(record, field, value))
}

fn invalid(record: &Record, field: &'static str, value: String) -> DecodeError {
    DecodeError::InvalidLiteral {
        subject: record.about.clone(),
        field,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::{RdfNode, RdfObject};

    const NS: &str = "http://rdf.rhea-db.org/";

    fn iri(subject: &str, predicate: &str, object: &str) -> RdfStatement {
        RdfStatement {
            subject: RdfNode::Iri(subject.to_string()),
            predicate_iri: predicate.to_string(),
            object: RdfObject::Node(RdfNode::Iri(object.to_string())),
        }
    }

    fn lit(subject: &str, predicate: &str, lexical: &str) -> RdfStatement {
        RdfStatement {
            subject: RdfNode::Iri(subject.to_string()),
            predicate_iri: predicate.to_string(),
            object: RdfObject::Literal(lexical.to_string()),
        }
    }

    #[test]
    fn groups_by_subject_in_first_seen_order() {
        let a = format!("{NS}10000");
        let b = format!("{NS}Compound_1");
        let statements = vec![
            lit(&a, &format!("{NS}accession"), "RHEA:10000"),
            lit(&b, &format!("{NS}name"), "water"),
            lit(&a, &format!("{NS}id"), "10000"),
            iri(
                &a,
                "http://www.w3.org/2000/01/rdf-schema#subClassOf",
                &format!("{NS}DirectionalReaction"),
            ),
        ];

        let records = records_from_statements(statements).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].about, a);
        assert_eq!(records[0].id, 10000);
        assert_eq!(records[0].accession, "RHEA:10000");
        assert_eq!(records[0].subclass_of, vec![format!("{NS}DirectionalReaction")]);
        assert_eq!(records[1].name, "water");
    }

    #[test]
    fn unknown_predicates_land_in_the_bag() {
        let side = format!("{NS}10000_L");
        let statements = vec![
            iri(&side, &format!("{NS}contains2"), &format!("{NS}Participant_1")),
            iri(&side, &format!("{NS}contains"), &format!("{NS}Participant_2")),
            iri(
                &side,
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                &format!("{NS}ReactionSide"),
            ),
        ];

        let records = records_from_statements(statements).unwrap();
        let record = &records[0];
        assert_eq!(record.contains, format!("{NS}Participant_2"));
        assert_eq!(
            record.properties,
            vec![
                ("contains2".to_string(), format!("{NS}Participant_1")),
                ("type".to_string(), format!("{NS}ReactionSide")),
            ]
        );
    }

    #[test]
    fn list_fields_accumulate() {
        let r = format!("{NS}10000");
        let statements = vec![
            iri(&r, &format!("{NS}citation"), "http://rdf.rhea-db.org/pubmed/1"),
            iri(&r, &format!("{NS}citation"), "http://rdf.rhea-db.org/pubmed/2"),
            iri(&r, &format!("{NS}substrates"), &format!("{NS}10000_L")),
            iri(&r, &format!("{NS}products"), &format!("{NS}10000_R")),
        ];

        let record = &records_from_statements(statements).unwrap()[0];
        assert_eq!(record.citations.len(), 2);
        assert_eq!(record.substrates, vec![format!("{NS}10000_L")]);
        assert_eq!(record.products, vec![format!("{NS}10000_R")]);
    }

    #[test]
    fn flags_accept_xsd_boolean_forms() {
        let r = format!("{NS}10000");
        let statements = vec![
            lit(&r, &format!("{NS}isTransport"), "1"),
            lit(&r, &format!("{NS}isChemicallyBalanced"), "true"),
        ];
        let record = &records_from_statements(statements).unwrap()[0];
        assert!(record.is_transport);
        assert!(record.is_chemically_balanced);
    }

    #[test]
    fn bad_literals_are_decode_errors() {
        let r = format!("{NS}10000");
        let err = records_from_statements(vec![lit(&r, &format!("{NS}id"), "ten")]).unwrap_err();
        match err {
            DecodeError::InvalidLiteral {
                subject,
                field,
                value,
            } => {
                assert_eq!(subject, r);
                assert_eq!(field, "id");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err =
            records_from_statements(vec![lit(&r, &format!("{NS}isTransport"), "yes")]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLiteral { field: "isTransport", .. }));
    }
}
