//! `contains*` property decoding.
//!
//! Rhea writes a participant's stoichiometric coefficient into the property
//! name: `rh:contains2`, `rh:containsN`, `rh:containsNminus1`, ... The suffix
//! is either one of four literal quantifiers or a decimal integer, sign
//! included.

use crate::entity::{ReactionSide, Rhea};
use crate::error::ResolveError;
use crate::record::Record;
use std::num::ParseIntError;

pub const CONTAINS_PREFIX: &str = "contains";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicity {
    pub count: i64,
    pub indefinite: bool,
    pub minus: bool,
    pub plus: bool,
}

impl Multiplicity {
    pub const fn exact(count: i64) -> Self {
        Self {
            count,
            indefinite: false,
            minus: false,
            plus: false,
        }
    }

    const fn indefinite(count: i64, minus: bool, plus: bool) -> Self {
        Self {
            count,
            indefinite: true,
            minus,
            plus,
        }
    }
}

/// Decode the part of a property name after `contains`.
pub fn decode_suffix(suffix: &str) -> Result<Multiplicity, ParseIntError> {
    match suffix {
        "N" => Ok(Multiplicity::indefinite(1, false, false)),
        "2n" => Ok(Multiplicity::indefinite(2, false, false)),
        "Nminus1" => Ok(Multiplicity::indefinite(1, true, false)),
        "Nplus1" => Ok(Multiplicity::indefinite(1, false, true)),
        digits => digits.parse().map(Multiplicity::exact),
    }
}

/// Append one [`ReactionSide`] per `contains*` property of `record`.
///
/// The record's `about` names the side; the property value names the
/// participant.
pub fn decode_record(record: &Record, out: &mut Rhea) -> Result<usize, ResolveError> {
    let mut produced = 0;
    for (property, value) in record.properties_with_prefix(CONTAINS_PREFIX) {
        let suffix = &property[CONTAINS_PREFIX.len()..];
        let multiplicity =
            decode_suffix(suffix).map_err(|source| ResolveError::InvalidContainsSuffix {
                about: record.about.clone(),
                property: property.to_string(),
                suffix: suffix.to_string(),
                source,
            })?;
        out.reaction_sides.push(ReactionSide {
            accession: record.about.clone(),
            multiplicity: multiplicity.count,
            indefinite: multiplicity.indefinite,
            minus: multiplicity.minus,
            plus: multiplicity.plus,
            compound: value.to_string(),
        });
        produced += 1;
    }
    Ok(produced)
}
