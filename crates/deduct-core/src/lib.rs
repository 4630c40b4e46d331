//! # Deduct Core
//!
//! RDF graph model for the Deduct reasoners: nodes, literals and triples,
//! the indexed [`TripleStore`], the RDF/RDFS/OWL/XSD vocabulary tables and
//! the XSD datatype tables shared by every rule profile.

pub mod datatypes;
pub mod model;
pub mod store;
pub mod vocab;

pub use model::*;
pub use store::*;

use thiserror::Error;

/// Errors raised when constructing model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid blank node id: {0}")]
    InvalidBlankNode(String),

    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),

    #[error("Ill-formed triple: {0}")]
    IllFormedTriple(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{rdf, rdfs, xsd};

    #[cfg(test)]
    mod store_tests {
        use super::*;

        #[test]
        fn test_store_holds_generalized_triples() {
            let mut store = TripleStore::new();
            let generalized = Triple::new(
                Literal::new_simple("x"),
                Node::iri(rdf::TYPE),
                Node::iri(rdfs::LITERAL),
            );

            assert!(!generalized.is_well_formed());
            assert!(store.add(generalized.clone()));
            assert!(store.contains(&generalized));
        }

        #[test]
        fn test_store_value_equality() {
            let mut store = TripleStore::new();
            let make = || {
                Triple::new(
                    Iri::new("http://example.org/s").unwrap(),
                    Iri::new("http://example.org/p").unwrap(),
                    Literal::new_typed("1", Iri::new_unchecked(xsd::INTEGER)),
                )
            };

            assert!(store.add(make()));
            assert!(!store.add(make()));
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn test_collect_into_store() {
            let triples = (0..10).map(|i| {
                Triple::new(
                    Node::iri(&format!("http://example.org/s{}", i % 5)),
                    Node::iri(rdf::TYPE),
                    Node::iri(rdfs::RESOURCE),
                )
            });
            let store: TripleStore = triples.collect();
            assert_eq!(store.len(), 5);
            assert_eq!((&store).into_iter().count(), 5);
        }
    }

    #[cfg(test)]
    mod error_tests {
        use super::*;

        #[test]
        fn test_model_error_messages() {
            let err = Iri::new("no scheme").unwrap_err();
            assert_eq!(err, ModelError::InvalidIri("no scheme".to_string()));
            assert_eq!(err.to_string(), "Invalid IRI: no scheme");

            let err = Triple::try_new(
                Literal::new_simple("s"),
                Node::iri(rdf::VALUE),
                Node::iri(rdf::NIL),
            )
            .unwrap_err();
            assert!(matches!(err, ModelError::IllFormedTriple(_)));
        }
    }
}
