//! RDF/XML → ordered statements (sophia).
//!
//! Terms are copied out of sophia through its `Term` accessors; literal
//! values keep only their lexical form, which is all a record field needs.

use crate::error::DecodeError;
use sophia::api::prelude::*;
use sophia::api::term::{Term, TermKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfNode {
    Iri(String),
    BlankNode(String),
}

impl RdfNode {
    /// Identifier text: the IRI, or `_:label` for blank nodes.
    pub fn text(&self) -> String {
        match self {
            RdfNode::Iri(iri) => iri.clone(),
            RdfNode::BlankNode(bn) => format!("_:{bn}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    Node(RdfNode),
    /// Lexical form; datatype and language tag are dropped.
    Literal(String),
}

impl RdfObject {
    /// IRI / blank node identifier, or the literal's lexical form.
    pub fn into_text(self) -> String {
        match self {
            RdfObject::Node(node) => node.text(),
            RdfObject::Literal(lexical) => lexical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfStatement {
    pub subject: RdfNode,
    pub predicate_iri: String,
    pub object: RdfObject,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct StatementSinkError(DecodeError);

/// Text after the last `#` or `/` of an IRI.
pub fn local_name(iri: &str) -> &str {
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

fn node_from_term<T: Term>(term: T) -> Result<RdfNode, DecodeError> {
    let kind = term.kind();
    let node = match kind {
        TermKind::Iri => term.iri().map(|iri| RdfNode::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| RdfNode::BlankNode(id.as_str().to_string())),
        _ => None,
    };
    node.ok_or_else(|| DecodeError::InvalidTerm(format!("expected IRI or blank node, got {kind:?}")))
}

fn object_from_term<T: Term>(term: T) -> Result<RdfObject, DecodeError> {
    if term.kind() == TermKind::Literal {
        return term
            .lexical_form()
            .map(|lexical| RdfObject::Literal(lexical.to_string()))
            .ok_or_else(|| DecodeError::InvalidTerm("literal without a lexical form".to_string()));
    }
    node_from_term(term).map(RdfObject::Node)
}

/// Parse an RDF/XML document into statements, in document order.
pub fn parse_statements(bytes: &[u8]) -> Result<Vec<RdfStatement>, DecodeError> {
    let reader = std::io::BufReader::new(std::io::Cursor::new(bytes));

    let mut out: Vec<RdfStatement> = Vec::new();
    let mut parser = sophia::xml::parser::parse_bufread(reader);
    parser
        .try_for_each_triple(|t| -> Result<(), StatementSinkError> {
            let subject = node_from_term(t.s()).map_err(StatementSinkError)?;
            let RdfNode::Iri(predicate_iri) = node_from_term(t.p()).map_err(StatementSinkError)?
            else {
                return Ok(());
            };
            let object = object_from_term(t.o()).map_err(StatementSinkError)?;
            out.push(RdfStatement {
                subject,
                predicate_iri,
                object,
            });
            Ok(())
        })
        .map_err(|e| DecodeError::Rdf(e.to_string()))?;

    tracing::debug!(statements = out.len(), "parsed RDF/XML");
    Ok(out)
}
