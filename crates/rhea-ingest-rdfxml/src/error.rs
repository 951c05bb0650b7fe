use rhea_core::ResolveError;
use thiserror::Error;

/// Input could not be turned into records. Nothing is resolved.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse RDF/XML: {0}")]
    Rdf(String),
    #[error("invalid RDF term: {0}")]
    InvalidTerm(String),
    #[error("invalid value {value:?} for `{field}` of {subject}")]
    InvalidLiteral {
        subject: String,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum RheaError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
