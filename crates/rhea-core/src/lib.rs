//! Rhea resolution engine.
//!
//! Turns the flat, loosely-typed records of a Rhea RDF dump into typed
//! entities:
//!
//! - [`subclass`]: classify records by their `subClassOf` type IRIs into
//!   reactions, compounds and reactive parts.
//! - [`contains`]: decode `contains*` property names into reaction-side
//!   multiplicities.
//! - [`resolve`]: the single pass that drives both and collects a [`Rhea`].
//! - [`index`]: optional consumer-side lookup for following string links.
//!
//! Decoding the document itself lives in `rhea-ingest-rdfxml`.

pub mod config;
pub mod contains;
pub mod entity;
pub mod error;
pub mod index;
pub mod record;
pub mod resolve;
pub mod subclass;

pub use config::ResolverConfig;
pub use entity::{
    Compound, CompoundKind, ParticipantLink, ReactivePart, Reaction, ReactionSide, Rhea,
};
pub use error::{ConfigError, ResolveError};
pub use index::RheaIndex;
pub use record::Record;
pub use resolve::{resolve, unrecognized_subclasses, Resolver};
