//! RDF / RDFS 公理トリプル
//!
//! The axiomatic triples of the RDF Semantics, restricted to the finite part:
//! container membership properties are handled by the engine, bounded by the
//! indices actually used in the graph.

use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{rdf, rdfs};

/// An axiom written as three IRIs
pub type Template = (&'static str, &'static str, &'static str);

/// RDF axiomatic triples
const RDF_AXIOMS: &[Template] = &[
    (rdf::TYPE, rdf::TYPE, rdf::PROPERTY),
    (rdf::SUBJECT, rdf::TYPE, rdf::PROPERTY),
    (rdf::PREDICATE, rdf::TYPE, rdf::PROPERTY),
    (rdf::OBJECT, rdf::TYPE, rdf::PROPERTY),
    (rdf::FIRST, rdf::TYPE, rdf::PROPERTY),
    (rdf::REST, rdf::TYPE, rdf::PROPERTY),
    (rdf::VALUE, rdf::TYPE, rdf::PROPERTY),
    (rdf::NIL, rdf::TYPE, rdf::LIST),
];

/// RDFS axiomatic triples: domains, ranges and the fixed hierarchy
const RDFS_AXIOMS: &[Template] = &[
    // domains
    (rdf::TYPE, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdfs::DOMAIN, rdfs::DOMAIN, rdf::PROPERTY),
    (rdfs::RANGE, rdfs::DOMAIN, rdf::PROPERTY),
    (rdfs::SUB_PROPERTY_OF, rdfs::DOMAIN, rdf::PROPERTY),
    (rdfs::SUB_CLASS_OF, rdfs::DOMAIN, rdfs::CLASS),
    (rdf::SUBJECT, rdfs::DOMAIN, rdf::STATEMENT),
    (rdf::PREDICATE, rdfs::DOMAIN, rdf::STATEMENT),
    (rdf::OBJECT, rdfs::DOMAIN, rdf::STATEMENT),
    (rdfs::MEMBER, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdf::FIRST, rdfs::DOMAIN, rdf::LIST),
    (rdf::REST, rdfs::DOMAIN, rdf::LIST),
    (rdfs::SEE_ALSO, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdfs::IS_DEFINED_BY, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdfs::COMMENT, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdfs::LABEL, rdfs::DOMAIN, rdfs::RESOURCE),
    (rdf::VALUE, rdfs::DOMAIN, rdfs::RESOURCE),
    // ranges
    (rdf::TYPE, rdfs::RANGE, rdfs::CLASS),
    (rdfs::DOMAIN, rdfs::RANGE, rdfs::CLASS),
    (rdfs::RANGE, rdfs::RANGE, rdfs::CLASS),
    (rdfs::SUB_PROPERTY_OF, rdfs::RANGE, rdf::PROPERTY),
    (rdfs::SUB_CLASS_OF, rdfs::RANGE, rdfs::CLASS),
    (rdf::SUBJECT, rdfs::RANGE, rdfs::RESOURCE),
    (rdf::PREDICATE, rdfs::RANGE, rdfs::RESOURCE),
    (rdf::OBJECT, rdfs::RANGE, rdfs::RESOURCE),
    (rdfs::MEMBER, rdfs::RANGE, rdfs::RESOURCE),
    (rdf::FIRST, rdfs::RANGE, rdfs::RESOURCE),
    (rdf::REST, rdfs::RANGE, rdf::LIST),
    (rdfs::SEE_ALSO, rdfs::RANGE, rdfs::RESOURCE),
    (rdfs::IS_DEFINED_BY, rdfs::RANGE, rdfs::RESOURCE),
    (rdfs::COMMENT, rdfs::RANGE, rdfs::LITERAL),
    (rdfs::LABEL, rdfs::RANGE, rdfs::LITERAL),
    (rdf::VALUE, rdfs::RANGE, rdfs::RESOURCE),
    // hierarchy
    (rdf::ALT, rdfs::SUB_CLASS_OF, rdfs::CONTAINER),
    (rdf::BAG, rdfs::SUB_CLASS_OF, rdfs::CONTAINER),
    (rdf::SEQ, rdfs::SUB_CLASS_OF, rdfs::CONTAINER),
    (rdfs::CONTAINER_MEMBERSHIP_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (rdfs::IS_DEFINED_BY, rdfs::SUB_PROPERTY_OF, rdfs::SEE_ALSO),
    (rdf::XML_LITERAL, rdf::TYPE, rdfs::DATATYPE),
    (rdf::XML_LITERAL, rdfs::SUB_CLASS_OF, rdfs::LITERAL),
    (rdfs::DATATYPE, rdfs::SUB_CLASS_OF, rdfs::CLASS),
    // class declarations
    (rdfs::RESOURCE, rdf::TYPE, rdfs::CLASS),
    (rdfs::CLASS, rdf::TYPE, rdfs::CLASS),
    (rdfs::LITERAL, rdf::TYPE, rdfs::CLASS),
    (rdfs::DATATYPE, rdf::TYPE, rdfs::CLASS),
    (rdfs::CONTAINER, rdf::TYPE, rdfs::CLASS),
    (rdfs::CONTAINER_MEMBERSHIP_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (rdf::PROPERTY, rdf::TYPE, rdfs::CLASS),
    (rdf::STATEMENT, rdf::TYPE, rdfs::CLASS),
    (rdf::LIST, rdf::TYPE, rdfs::CLASS),
    (rdf::ALT, rdf::TYPE, rdfs::CLASS),
    (rdf::BAG, rdf::TYPE, rdfs::CLASS),
    (rdf::SEQ, rdf::TYPE, rdfs::CLASS),
    // property declarations
    (rdfs::DOMAIN, rdf::TYPE, rdf::PROPERTY),
    (rdfs::RANGE, rdf::TYPE, rdf::PROPERTY),
    (rdfs::SUB_PROPERTY_OF, rdf::TYPE, rdf::PROPERTY),
    (rdfs::SUB_CLASS_OF, rdf::TYPE, rdf::PROPERTY),
    (rdfs::MEMBER, rdf::TYPE, rdf::PROPERTY),
    (rdfs::SEE_ALSO, rdf::TYPE, rdf::PROPERTY),
    (rdfs::IS_DEFINED_BY, rdf::TYPE, rdf::PROPERTY),
    (rdfs::COMMENT, rdf::TYPE, rdf::PROPERTY),
    (rdfs::LABEL, rdf::TYPE, rdf::PROPERTY),
];

/// Build triples from `(s, p, o)` IRI templates
pub fn from_templates(templates: &[Template]) -> impl Iterator<Item = Triple> + '_ {
    templates
        .iter()
        .map(|(s, p, o)| Triple::new(Node::iri(s), Node::iri(p), Node::iri(o)))
}

/// RDF and RDFS axiomatic triples
pub fn rdfs_axioms() -> Vec<Triple> {
    from_templates(RDF_AXIOMS).chain(from_templates(RDFS_AXIOMS)).collect()
}
