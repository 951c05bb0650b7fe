//! Rhea RDF/XML ingestion (boundary adapter).
//!
//! - [`dump`]: read `rhea.rdf` / `rhea.rdf.gz` from disk.
//! - [`statements`]: parse RDF/XML with Sophia into ordered statements.
//! - [`records`]: group statements into `rhea_core::Record`s.
//!
//! [`parse_rhea_bytes`] and [`parse_rhea_file`] run the whole pipeline and
//! hand the records to the resolver. A decode failure stops before any
//! record is resolved.

pub mod dump;
pub mod error;
pub mod records;
pub mod statements;

pub use dump::read_dump;
pub use error::{DecodeError, RheaError};
pub use records::records_from_statements;
pub use statements::{parse_statements, RdfStatement};

use rhea_core::{Record, Resolver, ResolverConfig, Rhea};
use std::path::Path;

/// Decode an RDF/XML document into flat records.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
    records_from_statements(parse_statements(bytes)?)
}

pub fn parse_rhea_bytes(bytes: &[u8], config: &ResolverConfig) -> Result<Rhea, RheaError> {
    let records = decode_records(bytes)?;
    Ok(Resolver::new(config.clone()).resolve(&records)?)
}

pub fn parse_rhea_file(path: &Path, config: &ResolverConfig) -> Result<Rhea, RheaError> {
    let bytes = read_dump(path)?;
    parse_rhea_bytes(&bytes, config)
}
