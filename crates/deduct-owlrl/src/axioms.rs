//! OWL RL 公理トリプル
//!
//! The class and property axioms of the OWL 2 RDF-based semantics that the
//! rule tables depend on: every OWL class is typed and placed in the
//! hierarchy, every OWL property gets a domain and a range.

use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf, rdfs, xsd};
use deduct_rdfs::{from_templates, Template};

/// Annotation properties recognised by `prp-ap`
pub const ANNOTATION_PROPERTIES: &[&str] = &[
    rdfs::LABEL,
    rdfs::COMMENT,
    rdfs::SEE_ALSO,
    rdfs::IS_DEFINED_BY,
    owl::DEPRECATED,
    owl::VERSION_INFO,
    owl::PRIOR_VERSION,
    owl::BACKWARD_COMPATIBLE_WITH,
    owl::INCOMPATIBLE_WITH,
];

const CLASS_AXIOMS: &[Template] = &[
    (owl::ALL_DIFFERENT, rdf::TYPE, rdfs::CLASS),
    (owl::ALL_DIFFERENT, rdfs::SUB_CLASS_OF, rdfs::RESOURCE),
    (owl::ALL_DISJOINT_CLASSES, rdf::TYPE, rdfs::CLASS),
    (owl::ALL_DISJOINT_CLASSES, rdfs::SUB_CLASS_OF, rdfs::RESOURCE),
    (owl::ALL_DISJOINT_PROPERTIES, rdf::TYPE, rdfs::CLASS),
    (owl::ALL_DISJOINT_PROPERTIES, rdfs::SUB_CLASS_OF, rdfs::RESOURCE),
    (owl::ANNOTATION_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::ANNOTATION_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (owl::ASYMMETRIC_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::ASYMMETRIC_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
    (owl::CLASS, rdf::TYPE, rdfs::CLASS),
    (owl::CLASS, rdfs::SUB_CLASS_OF, rdfs::CLASS),
    (owl::DATA_RANGE, rdf::TYPE, rdfs::CLASS),
    (owl::DATA_RANGE, rdfs::SUB_CLASS_OF, rdfs::DATATYPE),
    (owl::DATATYPE_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::DATATYPE_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (owl::DEPRECATED_CLASS, rdf::TYPE, rdfs::CLASS),
    (owl::DEPRECATED_CLASS, rdfs::SUB_CLASS_OF, rdfs::CLASS),
    (owl::DEPRECATED_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::DEPRECATED_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (owl::FUNCTIONAL_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::FUNCTIONAL_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (owl::INVERSE_FUNCTIONAL_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::INVERSE_FUNCTIONAL_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
    (owl::IRREFLEXIVE_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::IRREFLEXIVE_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
    (rdfs::LITERAL, rdf::TYPE, rdfs::DATATYPE),
    (owl::NAMED_INDIVIDUAL, rdf::TYPE, rdfs::CLASS),
    (owl::NAMED_INDIVIDUAL, rdfs::SUB_CLASS_OF, owl::THING),
    (owl::NEGATIVE_PROPERTY_ASSERTION, rdf::TYPE, rdfs::CLASS),
    (owl::NEGATIVE_PROPERTY_ASSERTION, rdfs::SUB_CLASS_OF, rdfs::RESOURCE),
    (owl::NOTHING, rdf::TYPE, owl::CLASS),
    (owl::NOTHING, rdfs::SUB_CLASS_OF, owl::THING),
    (owl::OBJECT_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::OBJECT_PROPERTY, owl::EQUIVALENT_CLASS, rdf::PROPERTY),
    (owl::ONTOLOGY, rdf::TYPE, rdfs::CLASS),
    (owl::ONTOLOGY, rdfs::SUB_CLASS_OF, rdfs::RESOURCE),
    (owl::ONTOLOGY_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::ONTOLOGY_PROPERTY, rdfs::SUB_CLASS_OF, rdf::PROPERTY),
    (owl::REFLEXIVE_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::REFLEXIVE_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
    (owl::RESTRICTION, rdf::TYPE, rdfs::CLASS),
    (owl::RESTRICTION, rdfs::SUB_CLASS_OF, rdfs::CLASS),
    (owl::SYMMETRIC_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::SYMMETRIC_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
    (owl::THING, rdf::TYPE, owl::CLASS),
    (owl::TRANSITIVE_PROPERTY, rdf::TYPE, rdfs::CLASS),
    (owl::TRANSITIVE_PROPERTY, rdfs::SUB_CLASS_OF, owl::OBJECT_PROPERTY),
];

/// `(property, domain, range)`; each row also types the property
const PROPERTY_SIGNATURES: &[Template] = &[
    (owl::ALL_VALUES_FROM, owl::RESTRICTION, rdfs::CLASS),
    (owl::ASSERTION_PROPERTY, owl::NEGATIVE_PROPERTY_ASSERTION, rdf::PROPERTY),
    (owl::BACKWARD_COMPATIBLE_WITH, owl::ONTOLOGY, owl::ONTOLOGY),
    (owl::CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::COMPLEMENT_OF, owl::CLASS, owl::CLASS),
    (owl::DATATYPE_COMPLEMENT_OF, rdfs::DATATYPE, rdfs::DATATYPE),
    (owl::DEPRECATED, rdfs::RESOURCE, rdfs::RESOURCE),
    (owl::DIFFERENT_FROM, owl::THING, owl::THING),
    (owl::DISJOINT_UNION_OF, owl::CLASS, rdf::LIST),
    (owl::DISJOINT_WITH, owl::CLASS, owl::CLASS),
    (owl::DISTINCT_MEMBERS, owl::ALL_DIFFERENT, rdf::LIST),
    (owl::EQUIVALENT_CLASS, owl::CLASS, owl::CLASS),
    (owl::EQUIVALENT_PROPERTY, rdf::PROPERTY, rdf::PROPERTY),
    (owl::HAS_KEY, owl::CLASS, rdf::LIST),
    (owl::HAS_VALUE, owl::RESTRICTION, rdfs::RESOURCE),
    (owl::IMPORTS, owl::ONTOLOGY, owl::ONTOLOGY),
    (owl::INCOMPATIBLE_WITH, owl::ONTOLOGY, owl::ONTOLOGY),
    (owl::INTERSECTION_OF, owl::CLASS, rdf::LIST),
    (owl::INVERSE_OF, owl::OBJECT_PROPERTY, owl::OBJECT_PROPERTY),
    (owl::MAX_CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::MAX_QUALIFIED_CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::MEMBERS, rdfs::RESOURCE, rdf::LIST),
    (owl::MIN_CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::MIN_QUALIFIED_CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::ON_CLASS, owl::RESTRICTION, owl::CLASS),
    (owl::ON_DATA_RANGE, owl::RESTRICTION, rdfs::DATATYPE),
    (owl::ON_DATATYPE, rdfs::DATATYPE, rdfs::DATATYPE),
    (owl::ONE_OF, rdfs::CLASS, rdf::LIST),
    (owl::ON_PROPERTY, owl::RESTRICTION, rdf::PROPERTY),
    (owl::PRIOR_VERSION, owl::ONTOLOGY, owl::ONTOLOGY),
    (owl::PROPERTY_CHAIN_AXIOM, owl::OBJECT_PROPERTY, rdf::LIST),
    (owl::PROPERTY_DISJOINT_WITH, rdf::PROPERTY, rdf::PROPERTY),
    (owl::QUALIFIED_CARDINALITY, owl::RESTRICTION, xsd::NON_NEGATIVE_INTEGER),
    (owl::SAME_AS, owl::THING, owl::THING),
    (owl::SOME_VALUES_FROM, owl::RESTRICTION, rdfs::CLASS),
    (owl::SOURCE_INDIVIDUAL, owl::NEGATIVE_PROPERTY_ASSERTION, owl::THING),
    (owl::TARGET_INDIVIDUAL, owl::NEGATIVE_PROPERTY_ASSERTION, owl::THING),
    (owl::TARGET_VALUE, owl::NEGATIVE_PROPERTY_ASSERTION, rdfs::LITERAL),
    (owl::UNION_OF, rdfs::CLASS, rdf::LIST),
    (owl::VERSION_INFO, rdfs::RESOURCE, rdfs::RESOURCE),
    (owl::WITH_RESTRICTIONS, rdfs::DATATYPE, rdf::LIST),
];

const EXTRA_PROPERTY_TYPES: &[Template] = &[
    (owl::BACKWARD_COMPATIBLE_WITH, rdf::TYPE, owl::ANNOTATION_PROPERTY),
    (owl::BACKWARD_COMPATIBLE_WITH, rdf::TYPE, owl::ONTOLOGY_PROPERTY),
    (owl::DEPRECATED, rdf::TYPE, owl::ANNOTATION_PROPERTY),
    (owl::IMPORTS, rdf::TYPE, owl::ONTOLOGY_PROPERTY),
    (owl::INCOMPATIBLE_WITH, rdf::TYPE, owl::ANNOTATION_PROPERTY),
    (owl::INCOMPATIBLE_WITH, rdf::TYPE, owl::ONTOLOGY_PROPERTY),
    (owl::PRIOR_VERSION, rdf::TYPE, owl::ANNOTATION_PROPERTY),
    (owl::PRIOR_VERSION, rdf::TYPE, owl::ONTOLOGY_PROPERTY),
    (owl::VERSION_INFO, rdf::TYPE, owl::ANNOTATION_PROPERTY),
];

/// OWL RL axiomatic triples
pub fn owl_rl_axioms() -> Vec<Triple> {
    let mut triples: Vec<Triple> = from_templates(CLASS_AXIOMS).collect();
    for (property, domain, range) in PROPERTY_SIGNATURES {
        let property = Node::iri(property);
        triples.push(Triple::new(property.clone(), Node::iri(rdf::TYPE), Node::iri(rdf::PROPERTY)));
        triples.push(Triple::new(property.clone(), Node::iri(rdfs::DOMAIN), Node::iri(domain)));
        triples.push(Triple::new(property, Node::iri(rdfs::RANGE), Node::iri(range)));
    }
    triples.extend(from_templates(EXTRA_PROPERTY_TYPES));
    triples
}
